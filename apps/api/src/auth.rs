//! Server-side admin gate.
//!
//! Credentials live only in the settings document on the server; a successful
//! login yields a signed, expiring session token instead of shipping the
//! comparison values to the client. Repeated failures are not throttled.

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::settings::AdminCredentials;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "admin_session";
const SESSION_TTL_HOURS: i64 = 12;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: usize,
}

/// Exact string equality on both fields, nothing weaker.
pub fn verify_credentials(username: &str, password: &str, configured: &AdminCredentials) -> bool {
    username == configured.username && password == configured.password
}

pub fn issue_token(username: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (Utc::now() + chrono::Duration::hours(SESSION_TTL_HOURS)).timestamp() as usize;
    let claims = Claims {
        sub: username.to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Returns the subject of a valid, unexpired token.
pub fn verify_token(token: &str, secret: &str) -> Option<String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()
    .map(|data| data.claims.sub)
}

/// Session cookie carrying the admin token for the server-rendered UI.
pub fn session_cookie(token: &str) -> String {
    format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Strict; Max-Age={}",
        SESSION_TTL_HOURS * 3600
    )
}

pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0")
}

/// Extracts and validates the admin session from request cookies.
pub fn session_from_headers(headers: &HeaderMap, secret: &str) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    let token = cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(SESSION_COOKIE)?.strip_prefix('='))?;
    verify_token(token, secret)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub username: String,
}

/// POST /api/admin/login
///
/// Verifies the submitted pair against the settings document and returns a
/// signed session token. Any mismatch is a 401 with the fixed message.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let settings = state.settings.require_loaded().await?;

    if !verify_credentials(&request.username, &request.password, &settings.admin) {
        return Err(AppError::Unauthorized);
    }

    let token = issue_token(&request.username, &state.config.session_secret)
        .map_err(|e| AppError::Internal(e.into()))?;

    info!("admin login for {}", request.username);

    Ok(Json(LoginResponse { token }))
}

/// GET /api/admin/session
///
/// Validates a bearer token and echoes its subject.
pub async fn handle_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionResponse>, AppError> {
    let username = bearer_token(&headers)
        .and_then(|token| verify_token(token, &state.config.session_secret))
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(SessionResponse { username }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> AdminCredentials {
        AdminCredentials {
            username: "sam".to_string(),
            password: "kitchen-secret".to_string(),
        }
    }

    #[test]
    fn test_login_succeeds_iff_both_fields_match_exactly() {
        let creds = configured();
        assert!(verify_credentials("sam", "kitchen-secret", &creds));
        assert!(!verify_credentials("sam", "kitchen-Secret", &creds));
        assert!(!verify_credentials("Sam", "kitchen-secret", &creds));
        assert!(!verify_credentials("sam", "", &creds));
        assert!(!verify_credentials("", "", &creds));
        assert!(!verify_credentials("sam", " kitchen-secret", &creds));
    }

    #[test]
    fn test_token_round_trip() {
        let token = issue_token("sam", "secret").unwrap();
        assert_eq!(verify_token(&token, "secret").as_deref(), Some("sam"));
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let token = issue_token("sam", "secret").unwrap();
        assert_eq!(verify_token(&token, "other-secret"), None);
    }

    #[test]
    fn test_expired_token_rejected() {
        let claims = Claims {
            sub: "sam".to_string(),
            // well past the default validation leeway
            exp: (Utc::now() - chrono::Duration::hours(2)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();
        assert_eq!(verify_token(&token, "secret"), None);
    }

    #[test]
    fn test_session_from_cookie_header() {
        let token = issue_token("sam", "secret").unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            format!("theme=dark; {SESSION_COOKIE}={token}")
                .parse()
                .unwrap(),
        );
        assert_eq!(
            session_from_headers(&headers, "secret").as_deref(),
            Some("sam")
        );
    }

    #[test]
    fn test_session_absent_without_cookie() {
        let headers = HeaderMap::new();
        assert_eq!(session_from_headers(&headers, "secret"), None);
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        assert!(clear_session_cookie().contains("Max-Age=0"));
    }
}

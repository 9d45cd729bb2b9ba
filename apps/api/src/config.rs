use anyhow::{Context, Result};
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key. Optional at boot: the generation endpoint reports a
    /// configuration error per request when it is absent, so the rest of the
    /// app keeps serving.
    pub gemini_api_key: Option<String>,
    /// Path to the settings JSON document (admin credentials + ad config).
    pub settings_path: String,
    /// HMAC secret for admin session tokens. Falls back to a random per-boot
    /// value, which invalidates outstanding sessions on restart.
    pub session_secret: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            settings_path: std::env::var("SETTINGS_PATH")
                .unwrap_or_else(|_| "settings.json".to_string()),
            session_secret: optional_env("SESSION_SECRET").unwrap_or_else(random_secret),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn random_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(48)
        .map(char::from)
        .collect()
}

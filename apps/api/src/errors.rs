use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Generic user-facing message for any failure inside the generation path.
/// Provider, network, and parse errors all collapse to this string at the
/// response boundary; the distinguishable root cause goes to the log instead.
pub const GENERATION_FAILED: &str =
    "فشل في إنشاء الوصفة من الخادم. قد تكون هناك مشكلة في الإعدادات أو الطلب.";

/// Shown when the settings document could not be read at startup.
pub const SETTINGS_LOAD_FAILED: &str = "فشل تحميل ملف الإعدادات.";

/// Shown on an admin credential mismatch.
pub const INVALID_CREDENTIALS: &str = "اسم المستخدم أو كلمة المرور غير صحيحة.";

/// Application-level error type.
/// Implements `IntoResponse` so axum handlers can return `Result<T, AppError>`.
/// Response bodies are `{ "message": ... }`, the shape the frontend consumes.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid credentials")]
    Unauthorized,

    #[error("Gemini API key is not configured")]
    MissingApiKey,

    #[error("Settings document is still loading")]
    SettingsLoading,

    #[error("Settings document failed to load")]
    SettingsFailed,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::SettingsLoading => StatusCode::SERVICE_UNAVAILABLE,
            AppError::MissingApiKey
            | AppError::SettingsFailed
            | AppError::Llm(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message exposed to the end user. Deliberately coarser than the
    /// internal error kind for the 500 family.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::MethodNotAllowed => "Only POST requests are allowed".to_string(),
            AppError::Unauthorized => INVALID_CREDENTIALS.to_string(),
            AppError::MissingApiKey => "API key is not configured on the server.".to_string(),
            AppError::SettingsLoading => "Settings are still loading.".to_string(),
            AppError::SettingsFailed => SETTINGS_LOAD_FAILED.to_string(),
            AppError::Llm(_) | AppError::Internal(_) => GENERATION_FAILED.to_string(),
        }
    }

    /// Logs the root cause for the error kinds whose user message hides it.
    pub fn log(&self) {
        match self {
            AppError::MissingApiKey => {
                tracing::error!("GEMINI_API_KEY is not set; rejecting generation request");
            }
            AppError::SettingsFailed => {
                tracing::error!("settings document unavailable");
            }
            AppError::Llm(e) => {
                tracing::error!("generation failed: {e}");
            }
            AppError::Internal(e) => {
                tracing::error!("internal error: {e:?}");
            }
            _ => {}
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let body = Json(json!({ "message": self.user_message() }));

        (self.status(), body).into_response()
    }
}

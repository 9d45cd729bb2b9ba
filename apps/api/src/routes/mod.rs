pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::generation::handlers;
use crate::state::AppState;
use crate::{auth, settings, ui};

/// The generation endpoint accepts only POST; any other method gets the
/// fixed `{ message }` body instead of axum's empty 405.
async fn method_not_allowed() -> Result<(), AppError> {
    Err(AppError::MethodNotAllowed)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Server-rendered UI
        .route("/", get(ui::index))
        .route("/ui/generate", post(ui::handle_generate_fragment))
        .route("/ui/dietary", post(ui::handle_dietary_toggle))
        .route("/ui/login", get(ui::login_modal).post(ui::handle_login_form))
        .route("/ui/logout", post(ui::handle_logout))
        // JSON API
        .route("/api/settings", get(settings::handle_get_settings))
        .route(
            "/api/generate",
            post(handlers::handle_generate).fallback(method_not_allowed),
        )
        .route("/api/admin/login", post(auth::handle_login))
        .route("/api/admin/session", get(auth::handle_session))
        .with_state(state)
}

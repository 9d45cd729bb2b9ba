use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::settings::SettingsHandle;

/// Shared application state injected into all route handlers via axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when `GEMINI_API_KEY` is absent; generation requests then fail
    /// with a configuration error instead of the process refusing to boot.
    pub llm: Option<LlmClient>,
    /// Tri-state settings document, filled once by the startup task.
    pub settings: SettingsHandle,
    pub config: Config,
}

//! The settings document: admin credentials and ad banner configuration.
//!
//! Loaded exactly once at startup. The load is never retried; a failure
//! leaves the UI blocked on a fatal message. Credentials stay server-side:
//! the public projection served to clients carries only the ad config.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdConfig {
    pub enabled: bool,
    pub image_url: String,
    pub description: String,
    pub link: String,
}

/// The full settings document. Deliberately not `Serialize`: the admin
/// credentials must never travel back out over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub admin: AdminCredentials,
    pub ad: AdConfig,
}

/// What `GET /api/settings` exposes.
#[derive(Debug, Serialize)]
pub struct PublicSettings {
    pub ad: AdConfig,
}

/// Tri-state lifecycle of the settings document. `Failed` is terminal for
/// the lifetime of the process.
#[derive(Debug, Clone)]
pub enum SettingsState {
    Loading,
    Loaded(AppSettings),
    Failed(String),
}

/// Shared handle to the settings state, filled once by the startup task.
#[derive(Clone)]
pub struct SettingsHandle {
    inner: Arc<RwLock<SettingsState>>,
}

impl SettingsHandle {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(SettingsState::Loading)),
        }
    }

    #[cfg(test)]
    pub fn preloaded(settings: AppSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SettingsState::Loaded(settings))),
        }
    }

    /// Performs the single startup read of the settings document.
    pub async fn load_from_path(&self, path: &str) {
        let state = match read_settings(path).await {
            Ok(settings) => {
                info!("settings loaded from {path} (ad enabled: {})", settings.ad.enabled);
                SettingsState::Loaded(settings)
            }
            Err(e) => {
                error!("failed to load settings from {path}: {e}");
                SettingsState::Failed(e.to_string())
            }
        };
        *self.inner.write().await = state;
    }

    pub async fn snapshot(&self) -> SettingsState {
        self.inner.read().await.clone()
    }

    /// Returns the loaded settings or the matching configuration error.
    pub async fn require_loaded(&self) -> Result<AppSettings, AppError> {
        match self.snapshot().await {
            SettingsState::Loaded(settings) => Ok(settings),
            SettingsState::Loading => Err(AppError::SettingsLoading),
            SettingsState::Failed(_) => Err(AppError::SettingsFailed),
        }
    }
}

async fn read_settings(path: &str) -> anyhow::Result<AppSettings> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// GET /api/settings
///
/// Returns the public projection of the settings document: 503 while the
/// startup read is in flight, 500 once it has failed.
pub async fn handle_get_settings(
    State(state): State<AppState>,
) -> Result<Json<PublicSettings>, AppError> {
    let settings = state.settings.require_loaded().await?;
    Ok(Json(PublicSettings { ad: settings.ad }))
}

mod auth;
mod config;
mod errors;
mod generation;
mod llm_client;
mod routes;
mod settings;
mod state;
mod ui;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::settings::SettingsHandle;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting sam kitchen API v{}", env!("CARGO_PKG_VERSION"));

    // Kick off the single startup read of the settings document. The UI
    // blocks on this tri-state handle until it resolves; a failure is final.
    let settings = SettingsHandle::new();
    {
        let settings = settings.clone();
        let path = config.settings_path.clone();
        tokio::spawn(async move {
            settings.load_from_path(&path).await;
        });
    }

    // Initialize the LLM client. A missing key is not fatal at boot: the
    // generation endpoint reports it per request.
    let llm = match &config.gemini_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(LlmClient::new(key.clone()))
        }
        None => {
            warn!("GEMINI_API_KEY is not set; recipe generation will fail until it is configured");
            None
        }
    };

    let state = AppState {
        llm,
        settings,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

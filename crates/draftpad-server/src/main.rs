//! Draftpad server entry point.
//!
//! Wires the file store and suggestion backends into the Axum edge
//! server. All configuration comes from the environment:
//!
//! - `STORE_URL` -- `redis://` URL for the file store, or unset for
//!   the in-memory backend
//! - `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `SUGGEST_MODEL`,
//!   `SUGGEST_BACKEND` -- completion API settings
//! - `HOST`, `PORT` -- bind address (default `0.0.0.0:8080`)

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use draftpad_server::server::{start_server, ServerConfig};
use draftpad_server::state::AppState;
use draftpad_store::FileStore;
use draftpad_suggest::{create_backend, SuggestConfig};

/// Application entry point.
///
/// Initializes logging, loads configuration from environment variables,
/// connects the store backend, builds the suggestion backend, then
/// serves requests until the process is terminated.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the store connection
/// fails, or the server cannot bind.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("draftpad-server starting");

    // Connect the file store backend
    let store_url = std::env::var("STORE_URL").ok();
    let store = FileStore::from_url(store_url.as_deref()).await?;
    info!(backend = store.name(), "file store ready");

    // Build the suggestion backend
    let suggest_config = SuggestConfig::from_env()?;
    let suggest = create_backend(&suggest_config);
    info!(
        backend = suggest.name(),
        model = suggest_config.model,
        "suggestion backend ready"
    );

    let state = Arc::new(AppState::new(store, suggest));

    let server_config = ServerConfig::from_env()?;
    start_server(&server_config, state).await?;

    Ok(())
}

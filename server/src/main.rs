mod config;
mod routes;
mod state;

use std::process::ExitCode;

use flows::{DataStore, StoreError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, ConfigError, DEFAULT_LOG_FILTER};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("dataset load failed: {0}")]
    Store(#[from] StoreError),
    #[error("{0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Read .env before the subscriber so RUST_LOG from the file applies.
    let dotenv = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "trade atlas failed to start");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;

    let store = match &config.data_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "loading datasets from disk");
            DataStore::from_dir(dir)?
        }
        None => DataStore::builtin()?,
    };
    tracing::info!(
        fingerprint = store.short_fingerprint(),
        flows = store.flows().len(),
        materials = store.materials().len(),
        countries = store.profiles().len(),
        "datasets loaded"
    );

    let state = state::AppState::new(store);
    let app = routes::app(state, &config.assets_dir).map_err(StartupError::Leptos)?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "trade atlas listening");
    axum::serve(listener, app).await?;
    Ok(())
}

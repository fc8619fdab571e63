//! Custom Status Server
//!
//! Runs the custom status plugin on its own, with an in-memory user store
//! standing in for the host's user storage.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use status_core::config::AppConfig;
use status_core::error::AppError;
use status_core::traits::UserStore;
use status_store::MemoryUserStore;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration for the environment named by `STATUS_ENV`
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("STATUS_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Seed the user store and serve until shutdown
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting custom status server v{}", env!("CARGO_PKG_VERSION"));

    let store = match config.store.seed_file.as_deref() {
        Some(path) if std::path::Path::new(path).exists() => {
            status_store::load_seed_file(path).await?
        }
        Some(path) => {
            tracing::warn!(path, "Seed file not found, starting with an empty user store");
            MemoryUserStore::new()
        }
        None => MemoryUserStore::new(),
    };

    let users: Arc<dyn UserStore> = Arc::new(store);
    status_api::run_server(config, users).await
}

//! Application builder and server runner.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use tower_http::timeout::TimeoutLayer;

use status_core::config::AppConfig;
use status_core::error::AppError;
use status_core::traits::UserStore;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
///
/// Requests exceeding `server.request_timeout_seconds` are cut off; the
/// handler future, including any pending store call, is dropped.
pub fn build_app(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(cors)
}

/// Runs the server with the given configuration and user store until Ctrl+C.
pub async fn run_server(config: AppConfig, users: Arc<dyn UserStore>) -> Result<(), AppError> {
    let addr = config.server.bind_address();
    let state = AppState::new(config, users);

    tracing::info!(
        plugin_id = %state.plugin.info().id,
        version = %state.plugin.info().version,
        base_path = %state.config.plugin.base_path,
        "Mounting plugin"
    );

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Custom status server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}

//! Route definitions for the plugin HTTP API.
//!
//! Plugin routes are nested under the configured base path (default
//! `/api/v1`). The identity gate is a route layer, so it runs before
//! every matched plugin route while unknown paths fall through to 404.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the identity gate.
pub fn build_router(state: AppState) -> Router {
    let base_path = state.config.plugin.base_path.clone();

    Router::new()
        .nest(&base_path, plugin_routes())
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Greeting and status change, both behind the identity gate
fn plugin_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(handlers::hello::hello))
        .route(
            "/custom-status-change",
            put(handlers::status::custom_status_change),
        )
        .route_layer(axum_middleware::from_fn(
            middleware::identity::require_identity,
        ))
}

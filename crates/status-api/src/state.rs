//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use plugin_custom_status::CustomStatusPlugin;
use status_core::config::AppConfig;
use status_core::traits::UserStore;

/// Application state passed to every Axum handler via `State<AppState>`.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// The mounted plugin
    pub plugin: Arc<CustomStatusPlugin>,
}

impl AppState {
    /// Build the state for `config` on top of the host's user store.
    pub fn new(config: AppConfig, users: Arc<dyn UserStore>) -> Self {
        let plugin = CustomStatusPlugin::new(config.plugin.id.clone(), users);
        Self {
            config: Arc::new(config),
            plugin: Arc::new(plugin),
        }
    }
}

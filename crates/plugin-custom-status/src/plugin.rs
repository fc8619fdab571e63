//! Plugin descriptor wiring the status service to the host.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use status_core::traits::UserStore;

use crate::service::StatusService;

/// Static information about a plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Plugin identifier.
    pub id: String,
    /// Plugin version.
    pub version: String,
    /// Short description.
    pub description: String,
}

/// The custom status plugin as handed to the HTTP layer.
#[derive(Debug, Clone)]
pub struct CustomStatusPlugin {
    /// Plugin information
    info: PluginInfo,
    /// Status update workflow
    service: StatusService,
}

impl CustomStatusPlugin {
    /// Create the plugin with the given id on top of the host's user store.
    pub fn new(id: impl Into<String>, users: Arc<dyn UserStore>) -> Self {
        Self {
            info: PluginInfo {
                id: id.into(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: "Greeting and custom status endpoints".to_string(),
            },
            service: StatusService::new(users),
        }
    }

    /// Plugin information.
    pub fn info(&self) -> &PluginInfo {
        &self.info
    }

    /// The status update workflow.
    pub fn status_service(&self) -> &StatusService {
        &self.service
    }
}

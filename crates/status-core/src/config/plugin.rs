//! Plugin mount configuration.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Where and under which identifier the plugin routes are mounted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PluginConfig {
    /// Plugin identifier, used in logs.
    #[serde(default = "default_id")]
    #[validate(length(min = 1, message = "plugin id must not be empty"))]
    pub id: String,
    /// Path prefix all plugin routes are nested under.
    #[serde(default = "default_base_path")]
    #[validate(custom(function = "validate_base_path"))]
    pub base_path: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            id: default_id(),
            base_path: default_base_path(),
        }
    }
}

fn validate_base_path(path: &str) -> Result<(), ValidationError> {
    if !path.starts_with('/') || path.len() < 2 || path.ends_with('/') {
        return Err(ValidationError::new("base_path")
            .with_message("base_path must start with '/' and not end with '/'".into()));
    }
    Ok(())
}

fn default_id() -> String {
    "custom-status".to_string()
}

fn default_base_path() -> String {
    "/api/v1".to_string()
}

//! In-memory user store configuration for the standalone server.

use serde::{Deserialize, Serialize};

/// Settings for the development user store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Optional path to a JSON array of user records loaded at startup.
    #[serde(default)]
    pub seed_file: Option<String>,
}

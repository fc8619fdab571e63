//! Startup seeding from a JSON file.

use std::path::Path;

use status_core::error::AppError;
use status_core::result::AppResult;
use status_core::types::UserRecord;

use crate::memory::MemoryUserStore;

/// Load a JSON array of user records from `path` into a new store.
pub async fn load_seed_file(path: impl AsRef<Path>) -> AppResult<MemoryUserStore> {
    let path = path.as_ref();
    let raw = tokio::fs::read(path).await.map_err(|e| {
        AppError::configuration(format!(
            "Failed to read seed file '{}': {e}",
            path.display()
        ))
    })?;

    let records: Vec<UserRecord> = serde_json::from_slice(&raw)?;
    let store = MemoryUserStore::with_users(records);

    tracing::info!(path = %path.display(), users = store.len(), "Seeded user store");
    Ok(store)
}

//! In-memory user store using dashmap.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use status_core::error::AppError;
use status_core::result::AppResult;
use status_core::traits::UserStore;
use status_core::types::{UserId, UserRecord};

/// User store keeping whole records in memory.
///
/// `update_user` swaps the complete record under the map's shard lock,
/// so a reader never observes a half-written record.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<DashMap<UserId, UserRecord>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records`.
    pub fn with_users(records: impl IntoIterator<Item = UserRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Insert or replace a record without touching `updated_at`.
    pub fn insert(&self, record: UserRecord) {
        self.users.insert(record.id.clone(), record);
    }

    /// Snapshot of a stored record.
    pub fn snapshot(&self, id: &UserId) -> Option<UserRecord> {
        self.users.get(id).map(|entry| entry.value().clone())
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` if no users are stored.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_user(&self, id: &UserId) -> AppResult<UserRecord> {
        self.snapshot(id)
            .ok_or_else(|| AppError::not_found(format!("User '{id}' not found")))
    }

    async fn update_user(&self, mut user: UserRecord) -> AppResult<UserRecord> {
        let mut entry = self
            .users
            .get_mut(&user.id)
            .ok_or_else(|| AppError::not_found(format!("User '{}' not found", user.id)))?;

        user.updated_at = Some(Utc::now());
        *entry = user.clone();
        debug!(user_id = %user.id, "Stored user record");
        Ok(user)
    }
}

//! User storage collaborator.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{UserId, UserRecord};

/// Lookup and update of user records, implemented by the host.
///
/// `update_user` is expected to be atomic: either the whole record is
/// replaced or nothing changes. Implementations report a missing user
/// from `get_user` as an [`ErrorKind::NotFound`](crate::error::ErrorKind::NotFound)
/// error.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Fetch the record for `id`.
    async fn get_user(&self, id: &UserId) -> AppResult<UserRecord>;

    /// Replace the stored record and return what was stored.
    async fn update_user(&self, user: UserRecord) -> AppResult<UserRecord>;
}

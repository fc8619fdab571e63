//! Status update workflow: validate, fetch, merge, persist.

use std::sync::Arc;

use tracing::{debug, error};

use status_core::traits::UserStore;
use status_core::types::{UserId, UserRecord};

use crate::codec;
use crate::error::StatusError;
use crate::models::{CustomStatus, USER_PROPS_KEY_CUSTOM_STATUS};

/// Applies custom status changes to user records.
#[derive(Clone)]
pub struct StatusService {
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for StatusService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusService").finish()
    }
}

impl StatusService {
    /// Create a service backed by the host's user store.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Set the custom status of `user_id`.
    ///
    /// Makes exactly one `get_user` call and at most one `update_user`
    /// call. An empty status is rejected before the store is touched.
    /// Nothing is retried.
    pub async fn update_status(
        &self,
        user_id: &UserId,
        status: &CustomStatus,
    ) -> Result<(), StatusError> {
        if status.is_empty() {
            return Err(StatusError::EmptyStatus);
        }

        let mut user = self.users.get_user(user_id).await.map_err(|e| {
            error!(user_id = %user_id, error = %e, "Failed to fetch user");
            if e.is_not_found() {
                StatusError::UserNotFound {
                    user_id: user_id.clone(),
                }
            } else {
                StatusError::UserLookupFailed {
                    user_id: user_id.clone(),
                    source: e,
                }
            }
        })?;

        apply_status(&mut user, status).inspect_err(|e| {
            error!(user_id = %user_id, error = %e, "Failed to set custom status");
        })?;

        self.users.update_user(user).await.map_err(|e| {
            error!(user_id = %user_id, error = %e, "Failed to update user");
            StatusError::UserUpdateFailed {
                user_id: user_id.clone(),
                source: e,
            }
        })?;

        debug!(user_id = %user_id, "Custom status updated");
        Ok(())
    }
}

/// Write the encoded status into `props`, creating missing maps first.
///
/// Only the status key is overwritten.
pub fn apply_status(user: &mut UserRecord, status: &CustomStatus) -> Result<(), StatusError> {
    let encoded = codec::encode(status)?;
    user.ensure_props();
    user.props
        .get_or_insert_with(Default::default)
        .insert(USER_PROPS_KEY_CUSTOM_STATUS.to_string(), encoded);
    Ok(())
}

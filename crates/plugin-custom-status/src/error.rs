//! Error type for the status update workflow.
//!
//! Collaborator failures carry the user id and the host's error for the
//! logs; their `AppError` mapping only exposes a generic message.

use status_core::error::{AppError, ErrorKind};
use status_core::types::UserId;
use thiserror::Error;

/// Failures of [`StatusService`](crate::service::StatusService).
#[derive(Debug, Error)]
pub enum StatusError {
    /// Neither emoji nor text was given.
    #[error("Custom status must have an emoji or text")]
    EmptyStatus,

    /// The store has no record for the caller.
    #[error("User '{user_id}' not found")]
    UserNotFound {
        /// The caller identity.
        user_id: UserId,
    },

    /// The store failed while fetching the caller's record.
    #[error("Failed to fetch user '{user_id}': {source}")]
    UserLookupFailed {
        /// The caller identity.
        user_id: UserId,
        /// Error reported by the store.
        #[source]
        source: AppError,
    },

    /// The store rejected the updated record.
    #[error("Failed to update user '{user_id}': {source}")]
    UserUpdateFailed {
        /// The caller identity.
        user_id: UserId,
        /// Error reported by the store.
        #[source]
        source: AppError,
    },

    /// The status could not be encoded or decoded.
    #[error("Custom status codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

impl From<StatusError> for AppError {
    fn from(err: StatusError) -> Self {
        match err {
            StatusError::EmptyStatus => AppError::validation(err.to_string()),
            StatusError::UserNotFound { .. } => AppError::upstream("User lookup failed"),
            StatusError::UserLookupFailed { .. } => AppError::upstream("User lookup failed"),
            StatusError::UserUpdateFailed { .. } => AppError::upstream("User update failed"),
            StatusError::Codec(e) => AppError::with_source(
                ErrorKind::Serialization,
                "Failed to encode custom status",
                e,
            ),
        }
    }
}

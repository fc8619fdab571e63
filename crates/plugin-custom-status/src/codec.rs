//! Stored form of a [`CustomStatus`].
//!
//! The stored form is compact JSON with `emoji` before `text`, e.g.
//! `{"emoji":"😀","text":"Busy"}`. `decode` is the exact inverse of
//! `encode`.

use crate::error::StatusError;
use crate::models::CustomStatus;

/// Serialize a status into the string stored in `props`.
pub fn encode(status: &CustomStatus) -> Result<String, StatusError> {
    Ok(serde_json::to_string(status)?)
}

/// Parse a stored status string.
pub fn decode(stored: &str) -> Result<CustomStatus, StatusError> {
    Ok(serde_json::from_str(stored)?)
}

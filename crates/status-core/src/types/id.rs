//! Caller identity as handed over by the host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of an already-authenticated user.
///
/// The host decides the format; the plugin only checks that one is
/// present and never generates or parses it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Build an identifier from a raw header or query value.
    ///
    /// Returns `None` when the value is empty or only whitespace. Any
    /// other value is kept exactly as given.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

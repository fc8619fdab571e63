//! User record as owned by the host's user storage.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::UserId;

/// The host's representation of a user.
///
/// Only the fields the plugin reads or writes are modelled. Both property
/// maps may be missing on records coming from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Identifier of the user.
    pub id: UserId,
    /// Login name.
    #[serde(default)]
    pub username: String,
    /// Arbitrary key-value properties.
    #[serde(default)]
    pub props: Option<HashMap<String, String>>,
    /// Notification preferences.
    #[serde(default)]
    pub notify_props: Option<HashMap<String, String>>,
    /// Last time the store accepted an update for this record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Create a record with no property maps.
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            props: None,
            notify_props: None,
            updated_at: None,
        }
    }

    /// Attach a `props` map.
    pub fn with_props(mut self, props: HashMap<String, String>) -> Self {
        self.props = Some(props);
        self
    }

    /// Make sure both property maps exist.
    ///
    /// Absent maps become empty maps; present maps are left untouched.
    pub fn ensure_props(&mut self) {
        self.props.get_or_insert_with(HashMap::new);
        self.notify_props.get_or_insert_with(HashMap::new);
    }

    /// Look up a single entry in `props`.
    pub fn prop(&self, key: &str) -> Option<&str> {
        self.props
            .as_ref()
            .and_then(|props| props.get(key))
            .map(String::as_str)
    }
}

//! Status value object.

use serde::{Deserialize, Deserializer, Serialize};

/// Key in `UserRecord::props` holding the serialized status.
pub const USER_PROPS_KEY_CUSTOM_STATUS: &str = "customStatus";

/// Emoji and text a user shows as their status.
///
/// Missing or `null` fields deserialize as empty strings. Field order is
/// fixed so the encoded form is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomStatus {
    /// Emoji name or glyph.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub emoji: String,
    /// Free-form status text.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

impl CustomStatus {
    /// Create a status from its two parts.
    pub fn new(emoji: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            text: text.into(),
        }
    }

    /// A status with neither emoji nor text cannot be set.
    pub fn is_empty(&self) -> bool {
        self.emoji.is_empty() && self.text.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

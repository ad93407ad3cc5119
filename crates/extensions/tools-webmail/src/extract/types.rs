//! Message records exchanged with the extractor scripts.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat a JSON `null` like a missing string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One inbox row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSummary {
    pub subject: String,
    pub sender: String,
    pub snippet: String,
    pub received_at: String,
    pub thread_id: String,
    pub message_id: String,
    pub href: String,
}

/// One message of an opened thread.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub subject: String,
    pub sender: String,
    pub received_at: String,
    pub body: String,
    pub message_index: usize,
    pub thread_id: String,
}

/// One-line digest of an inbox row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadDigest {
    pub thread_id: String,
    pub summary: String,
}

/// Row as reported by the list script, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMessageRow {
    #[serde(deserialize_with = "null_as_empty")]
    pub thread_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub message_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub subject: String,
    pub senders: Vec<Option<String>>,
    #[serde(deserialize_with = "null_as_empty")]
    pub snippet: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub received_at: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub href: String,
}

/// Every rendered message of the open thread, in display order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThreadSnapshot {
    #[serde(deserialize_with = "null_as_empty")]
    pub subject: String,
    pub messages: Vec<RawThreadMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawThreadMessage {
    #[serde(deserialize_with = "null_as_empty")]
    pub sender: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub received_at: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub body: String,
}

/// Answer of the open-thread script.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenThreadOutcome {
    pub found: bool,
    #[serde(default)]
    pub message: Option<String>,
}

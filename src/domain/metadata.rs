//! Sidecar metadata document stored next to each note.

use serde::{Deserialize, Deserializer, Serialize};

/// Persisted tag list of a note.
///
/// Stored as pretty-printed JSON in the `.meta` file beside the note content.
/// The format enforces nothing about the tags themselves: duplicates, casing,
/// and blanks are the writer's business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Tags in stored order.
    #[serde(default, deserialize_with = "nullable_list")]
    pub tags: Vec<String>,
}

impl Metadata {
    /// Creates metadata holding the given tags.
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }

    /// Parses a metadata document.
    ///
    /// A missing or `null` `tags` field yields an empty list. Unknown fields
    /// are ignored.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serializes the document with two-space indentation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

//! The persisted note entity.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::FrontmatterError;
use super::frontmatter::extract_frontmatter;

/// Open key/value metadata attached to a note.
pub type Metadata = serde_json::Map<String, Value>;

/// A markdown note with free-form metadata.
///
/// Stored as a JSON object with exactly the fields `id`, `content` and
/// `metadata`. Missing fields decode to their defaults, and absent metadata
/// is written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, also the storage key.
    #[serde(default)]
    pub id: String,

    /// Markdown body.
    #[serde(default)]
    pub content: String,

    /// Caller-supplied and frontmatter-derived metadata.
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

impl Note {
    /// Create a note without metadata.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            metadata: None,
        }
    }

    /// Attach metadata, replacing any existing map.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Return this note with its leading frontmatter moved into metadata.
    pub fn with_frontmatter_extracted(mut self) -> Result<Self, FrontmatterError> {
        extract_frontmatter(&mut self)?;
        Ok(self)
    }

    /// Look up a single metadata entry.
    pub fn metadata_value(&self, key: &str) -> Option<&Value> {
        self.metadata.as_ref().and_then(|m| m.get(key))
    }

    /// Serialize the note into its stored record format.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Deserialize a stored record.
    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

//! Error types for note storage.

use thiserror::Error;

use crate::kv::KvError;

/// Errors returned by [`NoteStore`](super::NoteStore) operations.
#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Note ID is required")]
    MissingId,

    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("Failed to encode note '{id}': {source}")]
    Encode {
        id: String,
        source: serde_json::Error,
    },

    #[error("Failed to decode note '{id}': {source}")]
    Decode {
        id: String,
        source: serde_json::Error,
    },

    #[error("Invalid frontmatter in note '{id}': {source}")]
    Frontmatter {
        id: String,
        source: FrontmatterError,
    },

    #[error("Storage error: {0}")]
    Store(#[from] KvError),
}

impl NoteError {
    /// Returns `true` if the request itself was invalid (empty id).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingId)
    }

    /// Returns `true` if no note exists under the requested id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` for engine failures and for notes that cannot be
    /// turned into a stored record.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            Self::Encode { .. } | Self::Decode { .. } | Self::Frontmatter { .. } | Self::Store(_)
        )
    }
}

/// A frontmatter block that is valid YAML but has no JSON form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrontmatterError {
    #[error("value of '{key}' is not a finite number")]
    NonFiniteNumber { key: String },
}

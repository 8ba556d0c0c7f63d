//! Unified error type for the md-publisher library.
//!
//! [`Error`] wraps the module-specific errors so application code can use
//! a single error type end to end.

use thiserror::Error;

use crate::kv::KvError;
use crate::notes::NoteError;

/// Unified error type for all md-publisher operations.
///
/// # Example
///
/// ```ignore
/// use md_publisher::{FjallStore, Note, NoteStore, Result};
///
/// fn publish(path: &std::path::Path) -> Result<()> {
///     let notes = NoteStore::new(FjallStore::open(path)?);
///     notes.save(&mut Note::new("hello", "# Hello"))?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Error from the key-value engine.
    #[error(transparent)]
    Kv(#[from] KvError),

    /// Error from note storage.
    #[error(transparent)]
    Note(#[from] NoteError),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a key-value engine error.
    pub fn is_kv(&self) -> bool {
        matches!(self, Self::Kv(_))
    }

    /// Returns `true` if this is a note storage error.
    pub fn is_note(&self) -> bool {
        matches!(self, Self::Note(_))
    }

    /// Returns `true` if no note exists under the requested id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Note(e) if e.is_not_found())
    }
}

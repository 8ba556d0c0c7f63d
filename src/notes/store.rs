//! Note persistence on top of a [`KvStore`].

use std::sync::Arc;

use crate::kv::{KvError, KvStore};
use crate::logging::{debug, error, trace, warn};

use super::error::NoteError;
use super::frontmatter::extract_frontmatter;
use super::note::Note;

/// Stores notes as JSON records keyed by note id.
///
/// Frontmatter is extracted once, on save. Reads return the stored
/// snapshot as-is. The store holds no state of its own beyond the shared
/// engine handle, so clones are cheap and may be used from any thread.
#[derive(Clone)]
pub struct NoteStore {
    store: Arc<dyn KvStore>,
}

impl NoteStore {
    /// Create a note store that owns `store`.
    pub fn new(store: impl KvStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create a note store over an engine shared with other users.
    pub fn from_shared(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Extract frontmatter from `note` and persist it, replacing any
    /// previous note with the same id.
    ///
    /// `note` is updated in place: after a successful call its content no
    /// longer starts with a frontmatter block and its metadata holds the
    /// extracted entries. Frontmatter holding a value with no JSON form
    /// fails the save before anything is written, leaving `note` as it was.
    pub fn save(&self, note: &mut Note) -> Result<(), NoteError> {
        if note.id.is_empty() {
            return Err(NoteError::MissingId);
        }

        extract_frontmatter(note).map_err(|source| NoteError::Frontmatter {
            id: note.id.clone(),
            source,
        })?;

        let record = note.encode().map_err(|source| NoteError::Encode {
            id: note.id.clone(),
            source,
        })?;

        self.store.set(&note.id, &record).map_err(|e| {
            error!(id = %note.id, error = %e, "failed to store note");
            e
        })?;

        debug!(id = %note.id, bytes = record.len(), "saved note");
        Ok(())
    }

    /// Load the note stored under `id`.
    pub fn get(&self, id: &str) -> Result<Note, NoteError> {
        if id.is_empty() {
            return Err(NoteError::MissingId);
        }

        let record = self.store.get(id).map_err(|e| match e {
            KvError::KeyNotFound(_) => NoteError::NotFound(id.to_string()),
            other => NoteError::Store(other),
        })?;

        trace!(id = id, bytes = record.len(), "loaded note record");

        Note::decode(&record).map_err(|source| NoteError::Decode {
            id: id.to_string(),
            source,
        })
    }

    /// Remove the note stored under `id`. Removing a missing note succeeds.
    pub fn delete(&self, id: &str) -> Result<(), NoteError> {
        if id.is_empty() {
            return Err(NoteError::MissingId);
        }

        self.store.delete(id)?;
        debug!(id = id, "deleted note");
        Ok(())
    }

    /// Load every note, in the engine's key order.
    ///
    /// Records that cannot be read or decoded are skipped, so one corrupt
    /// entry never fails the whole listing. Notes written or removed while
    /// the listing runs may or may not appear.
    pub fn list(&self) -> Result<Vec<Note>, NoteError> {
        let keys = self.store.list_keys()?;

        let notes = keys
            .into_iter()
            .filter_map(|key| {
                self.get(&key)
                    .map_err(|e| {
                        warn!(key = %key, error = %e, "skipping unreadable note record");
                        e
                    })
                    .ok()
            })
            .collect();

        Ok(notes)
    }

    /// Flush the underlying engine.
    pub fn close(&self) -> Result<(), NoteError> {
        self.store.close()?;
        Ok(())
    }
}

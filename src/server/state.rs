//! Application state management.

use std::path::Path;
use std::sync::Arc;

use crate::kv::{FjallStore, KvError};
use crate::notes::NoteStore;

use super::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    notes: NoteStore,
    /// Resolved once at startup; `None` leaves write routes open.
    api_key: Option<Arc<str>>,
}

impl AppState {
    /// Create state around an existing note store.
    pub fn new(notes: NoteStore, api_key: Option<&str>) -> Self {
        Self {
            notes,
            api_key: api_key.filter(|k| !k.is_empty()).map(Arc::from),
        }
    }

    /// Open the configured database and build the state.
    pub fn from_config(config: &Config) -> Result<Self, StateError> {
        let path = Path::new(&config.storage.path);
        let store = FjallStore::open(path).map_err(|e| StateError::OpenStore {
            path: config.storage.path.clone(),
            source: e,
        })?;

        Ok(Self::new(NoteStore::new(store), config.auth.api_key()))
    }

    /// The note store.
    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    /// The expected API key, if one is configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

/// Errors that can occur when setting up application state.
#[derive(Debug)]
pub enum StateError {
    /// Failed to open the note database.
    OpenStore { path: String, source: KvError },
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::OpenStore { path, source } => {
                write!(f, "Failed to open note database at '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for StateError {}

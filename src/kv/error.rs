//! Error types for the key-value store module.

use thiserror::Error;

/// Errors that can occur during key-value store operations.
#[derive(Error, Debug)]
pub enum KvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "fjall")]
    #[error("Fjall error: {0}")]
    Fjall(#[from] fjall::Error),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Empty keys are not allowed")]
    EmptyKey,

    #[error("Store lock poisoned")]
    Poisoned,
}

impl KvError {
    /// Returns `true` if the requested key does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound(_))
    }
}

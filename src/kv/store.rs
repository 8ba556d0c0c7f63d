//! The key-value contract the note store persists through.

use super::error::KvError;

/// Ordered, durable, string-keyed byte storage.
///
/// Implementations provide atomic single-key operations; the note store
/// never needs more than one call per operation, except for [`list_keys`]
/// followed by per-key reads, which carries no atomicity guarantee.
///
/// [`list_keys`]: KvStore::list_keys
pub trait KvStore: Send + Sync {
    /// Read the value stored at `key`.
    ///
    /// Fails with [`KvError::KeyNotFound`] when nothing is stored there.
    fn get(&self, key: &str) -> Result<Vec<u8>, KvError>;

    /// Store `value` at `key`, replacing any previous value.
    ///
    /// Once this returns `Ok` the write is durable.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), KvError>;

    /// Remove `key`. Removing an absent key succeeds.
    fn delete(&self, key: &str) -> Result<(), KvError>;

    /// All keys in the store, in the engine's iteration order.
    fn list_keys(&self) -> Result<Vec<String>, KvError>;

    /// Flush pending state. Remaining resources are released on drop.
    fn close(&self) -> Result<(), KvError>;
}

pub(crate) fn check_key(key: &str) -> Result<(), KvError> {
    if key.is_empty() {
        return Err(KvError::EmptyKey);
    }
    Ok(())
}

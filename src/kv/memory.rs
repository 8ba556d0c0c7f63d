//! In-memory ordered KV store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use super::error::KvError;
use super::store::{KvStore, check_key};

/// Key-value store kept in a `BTreeMap` behind a read/write lock.
///
/// Keys iterate in ascending byte order, like the on-disk engine. Nothing
/// is persisted; `close` is a no-op.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> Result<usize, KvError> {
        let data = self.data.read().map_err(|_| KvError::Poisoned)?;
        Ok(data.len())
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> Result<bool, KvError> {
        Ok(self.len()? == 0)
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Vec<u8>, KvError> {
        check_key(key)?;
        let data = self.data.read().map_err(|_| KvError::Poisoned)?;
        data.get(key)
            .cloned()
            .ok_or_else(|| KvError::KeyNotFound(key.to_string()))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), KvError> {
        check_key(key)?;
        let mut data = self.data.write().map_err(|_| KvError::Poisoned)?;
        data.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), KvError> {
        check_key(key)?;
        let mut data = self.data.write().map_err(|_| KvError::Poisoned)?;
        data.remove(key);
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>, KvError> {
        let data = self.data.read().map_err(|_| KvError::Poisoned)?;
        Ok(data.keys().cloned().collect())
    }

    fn close(&self) -> Result<(), KvError> {
        Ok(())
    }
}

//! KV store implementation using fjall.

use std::path::Path;

use fjall::{Keyspace, KeyspaceCreateOptions, PersistMode};

use crate::logging::{debug, info};

use super::error::KvError;
use super::store::{KvStore, check_key};

/// Keyspace holding note records.
const NOTES_KEYSPACE: &str = "notes";

/// Key-value store backed by fjall.
pub struct FjallStore {
    db: fjall::Database,
    notes: Keyspace,
}

impl FjallStore {
    /// Open the store at `path`, creating it if it does not exist yet.
    pub fn open(path: &Path) -> Result<Self, KvError> {
        info!(path = %path.display(), "opening fjall store");

        let db = fjall::Database::builder(path).open()?;
        let notes = db.keyspace(NOTES_KEYSPACE, KeyspaceCreateOptions::default)?;

        Ok(Self { db, notes })
    }
}

impl KvStore for FjallStore {
    fn get(&self, key: &str) -> Result<Vec<u8>, KvError> {
        check_key(key)?;
        match self.notes.get(key)? {
            Some(value) => Ok(value.to_vec()),
            None => Err(KvError::KeyNotFound(key.to_string())),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), KvError> {
        check_key(key)?;
        self.notes.insert(key, value)?;
        self.db.persist(PersistMode::SyncAll)?;
        debug!(key = key, bytes = value.len(), "stored value");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), KvError> {
        check_key(key)?;
        self.notes.remove(key)?;
        self.db.persist(PersistMode::SyncAll)?;
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>, KvError> {
        let mut keys = Vec::new();

        for kv in self.notes.iter() {
            let key_bytes = kv.key()?;
            keys.push(String::from_utf8_lossy(&key_bytes).into_owned());
        }

        Ok(keys)
    }

    fn close(&self) -> Result<(), KvError> {
        self.db.persist(PersistMode::SyncAll)?;
        Ok(())
    }
}

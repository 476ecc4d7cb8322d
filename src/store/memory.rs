//! # In-Memory Store

use std::collections::HashMap;
use std::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::{validate_key, KeyValueStore};

/// Volatile store, used in tests and when no data directory is wanted
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        validate_key(key)?;
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        validate_key(key)?;
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        validate_key(key)?;
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;
        entries.remove(key);
        Ok(())
    }
}

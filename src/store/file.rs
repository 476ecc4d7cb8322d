//! # JSON File Store
//!
//! One `<key>.json` file per key. Writes go to a temporary file that is then
//! renamed into place.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::errors::{StoreError, StoreResult};
use super::{validate_key, KeyValueStore};

/// Directory-backed store
#[derive(Debug)]
pub struct JsonFileStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::IoError(e.to_string()))?;
        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    /// Directory holding the documents
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        validate_key(key)?;
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::IoError(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        validate_key(key)?;
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;

        let target = self.path_for(key);
        let tmp = self.root.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, value).map_err(|e| StoreError::IoError(e.to_string()))?;
        fs::rename(&tmp, &target).map_err(|e| StoreError::IoError(e.to_string()))
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        validate_key(key)?;
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;

        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::IoError(e.to_string())),
        }
    }
}

//! # Key-Value Store
//!
//! Small persistence capability used by the repositories. Values are JSON
//! documents stored under short keys such as `artworks` or `users`.

pub mod errors;
pub mod file;
pub mod memory;

pub use errors::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Backend trait for key-value persistence
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`; missing keys are not an error
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Keys are restricted so they map safely onto file names
pub fn validate_key(key: &str) -> StoreResult<()> {
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Read and deserialize a JSON value, `None` if the key is absent
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> StoreResult<Option<T>> {
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt(format!("{}: {}", key, e))),
        None => Ok(None),
    }
}

/// Serialize and store a JSON value
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> StoreResult<()> {
    let raw = serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_validation() {
        assert!(validate_key("artworks").is_ok());
        assert!(validate_key("user_profiles-2").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc").is_err());
        assert!(validate_key("a/b").is_err());
    }

    #[test]
    fn test_json_helpers() {
        let store = MemoryStore::new();
        assert_eq!(load_json::<Vec<u32>>(&store, "numbers").unwrap(), None);

        save_json(&store, "numbers", &vec![1u32, 2, 3]).unwrap();
        assert_eq!(load_json::<Vec<u32>>(&store, "numbers").unwrap(), Some(vec![1, 2, 3]));

        store.set("numbers", "not json").unwrap();
        assert!(matches!(
            load_json::<Vec<u32>>(&store, "numbers"),
            Err(StoreError::Corrupt(_))
        ));
    }
}

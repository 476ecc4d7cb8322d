//! # Object Backend
//!
//! Flat byte storage addressed by object name. Names are single path
//! segments; backends reject anything else.

use super::errors::StorageResult;

/// Byte storage for image objects
pub trait ObjectBackend: Send + Sync + std::fmt::Debug {
    /// Store `data` under `name`, replacing any previous object
    fn put(&self, name: &str, data: &[u8]) -> StorageResult<()>;

    /// Bytes of `name`; `ObjectNotFound` if absent
    fn get(&self, name: &str) -> StorageResult<Vec<u8>>;

    /// Remove `name`; `ObjectNotFound` if absent
    fn remove(&self, name: &str) -> StorageResult<()>;

    fn contains(&self, name: &str) -> StorageResult<bool>;
}

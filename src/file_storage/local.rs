//! # Local Directory Backend
//!
//! One file per object inside a single directory.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::backend::ObjectBackend;
use super::errors::{StorageError, StorageResult};

/// Objects stored as files in `root`
#[derive(Debug)]
pub struct LocalBackend {
    root: PathBuf,
}

impl LocalBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// File for `name`; only plain single-segment names are accepted
    fn object_path(&self, name: &str) -> StorageResult<PathBuf> {
        let valid = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\', '\0']);
        if !valid {
            return Err(StorageError::InvalidObjectName(name.to_string()));
        }
        Ok(self.root.join(name))
    }
}

fn map_missing(name: &str, e: std::io::Error) -> StorageError {
    match e.kind() {
        ErrorKind::NotFound => StorageError::ObjectNotFound(name.to_string()),
        _ => StorageError::from(e),
    }
}

impl ObjectBackend for LocalBackend {
    fn put(&self, name: &str, data: &[u8]) -> StorageResult<()> {
        let path = self.object_path(name)?;
        fs::create_dir_all(&self.root)?;
        fs::write(path, data)?;
        Ok(())
    }

    fn get(&self, name: &str) -> StorageResult<Vec<u8>> {
        let path = self.object_path(name)?;
        fs::read(path).map_err(|e| map_missing(name, e))
    }

    fn remove(&self, name: &str) -> StorageResult<()> {
        let path = self.object_path(name)?;
        fs::remove_file(path).map_err(|e| map_missing(name, e))
    }

    fn contains(&self, name: &str) -> StorageResult<bool> {
        Ok(self.object_path(name)?.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_backend() -> (LocalBackend, TempDir) {
        let temp = TempDir::new().unwrap();
        (LocalBackend::new(temp.path().join("media")), temp)
    }

    #[test]
    fn test_put_creates_root() {
        let (backend, temp) = create_backend();
        backend.put("piece.png", b"png-bytes").unwrap();

        assert!(temp.path().join("media").is_dir());
        assert_eq!(backend.get("piece.png").unwrap(), b"png-bytes");
        assert!(backend.contains("piece.png").unwrap());
    }

    #[test]
    fn test_remove() {
        let (backend, _temp) = create_backend();
        backend.put("delete-me.jpg", b"bye").unwrap();
        backend.remove("delete-me.jpg").unwrap();

        assert!(!backend.contains("delete-me.jpg").unwrap());
        assert!(matches!(
            backend.remove("delete-me.jpg"),
            Err(StorageError::ObjectNotFound(_))
        ));
        assert!(matches!(
            backend.get("delete-me.jpg"),
            Err(StorageError::ObjectNotFound(_))
        ));
    }

    #[test]
    fn test_rejects_non_segment_names() {
        let (backend, _temp) = create_backend();
        for name in ["../secret", "/etc/passwd", "a/b.png", "a\\b", "", ".", ".."] {
            assert!(
                matches!(backend.get(name), Err(StorageError::InvalidObjectName(_))),
                "{name} should be rejected"
            );
        }
    }
}

//! # Image Store
//!
//! Stores uploaded artwork images under timestamped object names and maps
//! them to public URLs.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::backend::ObjectBackend;
use super::errors::{StorageError, StorageResult};

/// Metadata of a stored image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredImage {
    pub object_name: String,
    pub public_url: String,
    pub size: u64,
    pub content_type: String,
    pub checksum: String,
}

/// Image object store on top of a byte backend
#[derive(Debug)]
pub struct ImageStore<B: ObjectBackend> {
    backend: B,
    public_base_url: String,
    max_size: u64,
}

impl<B: ObjectBackend> ImageStore<B> {
    /// Create a store; `public_base_url` is the prefix objects are served under
    pub fn new(backend: B, public_base_url: impl Into<String>, max_size: u64) -> Self {
        let public_base_url = public_base_url.into().trim_end_matches('/').to_string();
        Self {
            backend,
            public_base_url,
            max_size,
        }
    }

    /// Public URL prefix without trailing slash
    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    /// Calculate checksum for data
    pub fn calculate_checksum(data: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data);
        format!("{:x}", hasher.finalize())
    }

    /// Store an image and return its metadata.
    ///
    /// Callers validate the file first; the size cap is re-checked here since
    /// it protects the disk.
    pub fn put(&self, file_name: &str, data: &[u8], content_type: &str) -> StorageResult<StoredImage> {
        let size = data.len() as u64;
        if size > self.max_size {
            return Err(StorageError::ImageTooLarge {
                size,
                max: self.max_size,
            });
        }

        let object_name = self.allocate_name(file_name)?;
        self.backend.put(&object_name, data)?;
        debug!(object = %object_name, size, "stored image object");

        Ok(StoredImage {
            public_url: self.public_url(&object_name),
            object_name,
            size,
            content_type: content_type.to_string(),
            checksum: Self::calculate_checksum(data),
        })
    }

    /// Read an object's bytes
    pub fn read(&self, object_name: &str) -> StorageResult<Vec<u8>> {
        self.backend.get(object_name)
    }

    /// Public URL of an object
    pub fn public_url(&self, object_name: &str) -> String {
        format!("{}/{}", self.public_base_url, object_name)
    }

    /// Object name addressed by a URL issued by this store, if any
    pub fn object_name_for_url<'a>(&self, url: &'a str) -> Option<&'a str> {
        let rest = url.strip_prefix(self.public_base_url.as_str())?.strip_prefix('/')?;
        let name = rest.split(['?', '#']).next().unwrap_or(rest);
        if name.is_empty() || name.contains('/') {
            None
        } else {
            Some(name)
        }
    }

    /// Delete the object behind `url`.
    ///
    /// Returns `Ok(false)` when the URL does not point into this store, e.g.
    /// externally hosted sample images.
    pub fn remove_by_url(&self, url: &str) -> StorageResult<bool> {
        match self.object_name_for_url(url) {
            Some(name) => {
                self.backend.remove(name)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn allocate_name(&self, file_name: &str) -> StorageResult<String> {
        let clean = clean_file_name(file_name);
        let millis = Utc::now().timestamp_millis();

        let mut candidate = format!("{}-{}", millis, clean);
        let mut attempt = 1;
        while self.backend.contains(&candidate)? {
            candidate = format!("{}-{}-{}", millis, attempt, clean);
            attempt += 1;
        }
        Ok(candidate)
    }
}

/// Reduce a client-supplied file name to a safe single path segment
fn clean_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned.to_string()
    }
}

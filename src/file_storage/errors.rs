//! # Image Storage Errors

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Image storage errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Image not found: {0}")]
    ObjectNotFound(String),

    #[error("Image too large: {size} bytes (max: {max})")]
    ImageTooLarge { size: u64, max: u64 },

    #[error("Invalid object name: {0}")]
    InvalidObjectName(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl StorageError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            StorageError::ObjectNotFound(_) => 404,
            StorageError::ImageTooLarge { .. } => 413,
            StorageError::InvalidObjectName(_) => 400,
            StorageError::Io(_) => 500,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e.to_string())
    }
}

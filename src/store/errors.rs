//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Stored value is corrupt: {0}")]
    Corrupt(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::InvalidKey(_) => 400,
            StoreError::Corrupt(_) => 500,
            StoreError::Serialization(_) => 500,
            StoreError::IoError(_) => 500,
            StoreError::Internal(_) => 500,
        }
    }
}

//! CLI errors
//!
//! Every failure printed by the binary starts with a stable
//! `ARTFOLIO_CLI_*` code so scripts can match on it.

use std::io;

use thiserror::Error;

use crate::gallery::GalleryError;
use crate::store::StoreError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Config file missing, unreadable or rejected by validation
    #[error("ARTFOLIO_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    #[error("ARTFOLIO_CLI_IO_ERROR: {0}")]
    Io(String),

    /// State could not be assembled or the server stopped
    #[error("ARTFOLIO_CLI_BOOT_FAILED: {0}")]
    Boot(String),
}

impl CliError {
    /// Stable code prefix of this error
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "ARTFOLIO_CLI_CONFIG_ERROR",
            CliError::Io(_) => "ARTFOLIO_CLI_IO_ERROR",
            CliError::Boot(_) => "ARTFOLIO_CLI_BOOT_FAILED",
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(format!("JSON error: {}", e))
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        CliError::Boot(format!("store: {}", e))
    }
}

impl From<GalleryError> for CliError {
    fn from(e: GalleryError) -> Self {
        CliError::Boot(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_starts_with_code() {
        let err = CliError::Config("data_dir is required".to_string());
        assert_eq!(err.code(), "ARTFOLIO_CLI_CONFIG_ERROR");
        assert_eq!(err.to_string(), "ARTFOLIO_CLI_CONFIG_ERROR: data_dir is required");
    }

    #[test]
    fn test_conversions_pick_codes() {
        let io = CliError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.code(), "ARTFOLIO_CLI_IO_ERROR");

        let store = CliError::from(StoreError::Corrupt("users".to_string()));
        assert_eq!(store.code(), "ARTFOLIO_CLI_BOOT_FAILED");
        assert!(store.to_string().contains("users"));
    }
}

//! # Validation Result

use serde::{Deserialize, Serialize};

/// Outcome of a single validator.
///
/// `error` is only set when `is_valid` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    /// A passing result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    /// A failing result carrying a user-facing message
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result` so callers can chain validators with `?`.
    pub fn into_result(self) -> Result<(), String> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.error.unwrap_or_else(|| "Invalid input".to_string()))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

//! HTTP error bodies
//!
//! Every handler error is a status code plus `{"error", "code"}`.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use tracing::error;

use crate::auth::AuthError;
use crate::file_storage::StorageError;
use crate::gallery::GalleryError;

/// Error type returned by handlers
pub type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(code: u16, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        Self::new(err.status_code(), err.to_string())
    }
}

impl From<GalleryError> for ErrorResponse {
    fn from(err: GalleryError) -> Self {
        Self::new(err.status_code(), err.to_string())
    }
}

impl From<StorageError> for ErrorResponse {
    fn from(err: StorageError) -> Self {
        Self::new(err.status_code(), err.to_string())
    }
}

/// Convert a domain error into a handler error
pub fn api_error(err: impl Into<ErrorResponse>) -> ApiError {
    let body = err.into();
    let status = StatusCode::from_u16(body.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!(code = body.code, error = %body.error, "request failed");
    }
    (status, Json(body))
}

/// A handler error with an explicit status and message
pub fn error_with(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse::new(status.as_u16(), message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status() {
        let (status, Json(body)) = api_error(GalleryError::UsernameTaken);
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.code, 409);
        assert_eq!(body.error, "This username is already taken");

        let (status, _) = api_error(AuthError::InvalidCredentials);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_error_response_serialization() {
        let json = serde_json::to_value(ErrorResponse::new(404, "missing")).unwrap();
        assert_eq!(json, serde_json::json!({"error": "missing", "code": 404}));
    }
}

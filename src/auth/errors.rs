//! # Auth Errors

use thiserror::Error;

use crate::store::StoreError;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Account and token errors
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown email and wrong password look the same to the caller
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password does not meet requirements: {0}")]
    WeakPassword(String),

    /// Account behind a token or id is gone
    #[error("User not found")]
    UserNotFound,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Internal error: password hashing failed")]
    HashingFailed,

    #[error("Internal error: token generation failed")]
    TokenGenerationFailed,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AuthError {
    /// HTTP status for this error
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::InvalidEmail | AuthError::WeakPassword(_) | AuthError::MalformedToken => 400,
            AuthError::InvalidCredentials
            | AuthError::UserNotFound
            | AuthError::TokenExpired
            | AuthError::InvalidSignature => 401,
            AuthError::EmailAlreadyExists => 409,
            AuthError::HashingFailed | AuthError::TokenGenerationFailed => 500,
            AuthError::Store(e) => e.status_code(),
        }
    }

    pub(crate) fn lock_poisoned() -> Self {
        AuthError::Store(StoreError::Internal("Lock poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::InvalidCredentials.status_code(), 401);
        assert_eq!(AuthError::EmailAlreadyExists.status_code(), 409);
        assert_eq!(AuthError::WeakPassword("short".into()).status_code(), 400);
        assert_eq!(AuthError::UserNotFound.status_code(), 401);
        assert_eq!(AuthError::lock_poisoned().status_code(), 500);
        assert_eq!(
            AuthError::from(StoreError::InvalidKey("a/b".into())).status_code(),
            400
        );
    }

    #[test]
    fn test_credentials_message_is_generic() {
        let message = AuthError::InvalidCredentials.to_string();
        assert!(!message.contains("password"));
        assert!(!message.contains("email"));
    }
}

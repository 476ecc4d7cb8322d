//! # Auth Context
//!
//! Identity of the caller, derived from a validated access token.

use uuid::Uuid;

/// Authenticated caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: String,
}

impl AuthContext {
    pub fn new(user_id: Uuid, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }

    /// Whether this caller owns a resource
    pub fn owns(&self, owner_id: Uuid) -> bool {
        self.user_id == owner_id
    }
}

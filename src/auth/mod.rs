//! # Auth Module
//!
//! Email/password accounts for the admin panel. Requests authenticate with
//! an HS256 bearer token that resolves to an [`AuthContext`].

pub mod context;
pub mod crypto;
pub mod errors;
pub mod service;
pub mod token;
pub mod user;

pub use context::AuthContext;
pub use crypto::PasswordPolicy;
pub use errors::{AuthError, AuthResult};
pub use service::AuthService;
pub use token::{AccessClaims, TokenResponse, TokenSettings, TokenSigner};
pub use user::{StoredUserRepository, User, UserRepository};

//! # Auth Service
//!
//! Signup, login and bearer-token resolution over a [`UserRepository`].

use email_address::EmailAddress;
use tracing::{debug, info};
use uuid::Uuid;

use super::context::AuthContext;
use super::crypto::PasswordPolicy;
use super::errors::{AuthError, AuthResult};
use super::token::{TokenResponse, TokenSigner};
use super::user::{User, UserRepository};

/// Trim and lowercase an email, rejecting anything not shaped like an address
pub fn normalize_email(email: &str) -> AuthResult<String> {
    let email = email.trim().to_lowercase();
    if EmailAddress::is_valid(&email) {
        Ok(email)
    } else {
        Err(AuthError::InvalidEmail)
    }
}

#[derive(Debug)]
pub struct AuthService<U: UserRepository> {
    users: U,
    tokens: TokenSigner,
    passwords: PasswordPolicy,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(users: U, tokens: TokenSigner) -> Self {
        Self {
            users,
            tokens,
            passwords: PasswordPolicy::default(),
        }
    }

    /// Create an account. Emails are unique after normalization.
    pub fn signup(&self, email: &str, password: &str) -> AuthResult<User> {
        let email = normalize_email(email)?;
        if self.users.find_by_email(&email)?.is_some() {
            return Err(AuthError::EmailAlreadyExists);
        }

        let user = User::register(email, password, &self.passwords)?;
        self.users.insert(&user)?;
        info!(user_id = %user.id, "account created");
        Ok(user)
    }

    /// Exchange credentials for a token. Every failure is `InvalidCredentials`.
    pub fn login(&self, email: &str, password: &str) -> AuthResult<(User, TokenResponse)> {
        let user = normalize_email(email)
            .ok()
            .map(|email| self.users.find_by_email(&email))
            .transpose()?
            .flatten()
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.check_password(password) {
            debug!(user_id = %user.id, "password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user)?;
        info!(user_id = %user.id, "logged in");
        Ok((user, token))
    }

    pub fn issue_token(&self, user: &User) -> AuthResult<TokenResponse> {
        self.tokens.issue(user)
    }

    /// Resolve a bearer token to its caller; tokens of deleted accounts fail
    pub fn validate_access_token(&self, token: &str) -> AuthResult<AuthContext> {
        let claims = self.tokens.verify(token)?;
        let user = self.get_user(claims.sub)?;
        Ok(AuthContext::new(user.id, user.email))
    }

    pub fn get_user(&self, id: Uuid) -> AuthResult<User> {
        self.users.find_by_id(id)?.ok_or(AuthError::UserNotFound)
    }

    pub fn delete_user(&self, id: Uuid) -> AuthResult<()> {
        self.users.delete(id)?;
        info!(user_id = %id, "account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::TokenSettings;
    use crate::auth::user::StoredUserRepository;

    fn create_service() -> AuthService<StoredUserRepository> {
        AuthService::new(
            StoredUserRepository::in_memory(),
            TokenSigner::new(TokenSettings::new("service-test-secret")),
        )
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(
            normalize_email("  Artist@Example.COM ").unwrap(),
            "artist@example.com"
        );
        assert!(matches!(normalize_email("nope"), Err(AuthError::InvalidEmail)));
        assert!(matches!(normalize_email(""), Err(AuthError::InvalidEmail)));
    }

    #[test]
    fn test_signup_and_login() {
        let service = create_service();
        let user = service.signup("Artist@Example.com", "password123").unwrap();
        assert_eq!(user.email, "artist@example.com");

        let (logged_in, token) = service.login("artist@example.com", "password123").unwrap();
        assert_eq!(logged_in.id, user.id);
        assert_eq!(token.token_type, "bearer");
        assert!(token.expires_in > 0);

        let ctx = service.validate_access_token(&token.access_token).unwrap();
        assert_eq!(ctx.user_id, user.id);
        assert_eq!(ctx.email, "artist@example.com");
    }

    #[test]
    fn test_duplicate_signup_rejected() {
        let service = create_service();
        service.signup("artist@example.com", "password123").unwrap();
        assert!(matches!(
            service.signup("ARTIST@example.com", "password456"),
            Err(AuthError::EmailAlreadyExists)
        ));
    }

    #[test]
    fn test_login_failures_are_generic() {
        let service = create_service();
        service.signup("artist@example.com", "password123").unwrap();

        assert!(matches!(
            service.login("artist@example.com", "wrong-password"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            service.login("nobody@example.com", "password123"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            service.login("not-an-email", "password123"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_weak_password_rejected() {
        let service = create_service();
        assert!(matches!(
            service.signup("artist@example.com", "short"),
            Err(AuthError::WeakPassword(_))
        ));
    }

    #[test]
    fn test_deleted_user_token_rejected() {
        let service = create_service();
        let user = service.signup("artist@example.com", "password123").unwrap();
        let token = service.issue_token(&user).unwrap();

        service.delete_user(user.id).unwrap();
        assert!(matches!(
            service.validate_access_token(&token.access_token),
            Err(AuthError::UserNotFound)
        ));
    }
}

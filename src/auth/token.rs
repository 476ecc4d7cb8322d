//! # Access Tokens
//!
//! HS256 bearer tokens for the admin panel. A token names the user and
//! their email; nothing else about the account is embedded.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{AuthError, AuthResult};
use super::user::User;

/// Default token lifetime in minutes
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;

const ISSUER: &str = "artfolio";
const AUDIENCE: &str = "artfolio-admin";

/// Claims carried by an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Account id
    pub sub: Uuid,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

/// Signing settings
#[derive(Clone)]
pub struct TokenSettings {
    pub secret: String,
    pub ttl_minutes: i64,
}

impl TokenSettings {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
        }
    }

    pub fn with_ttl_minutes(mut self, minutes: i64) -> Self {
        self.ttl_minutes = minutes;
        self
    }
}

impl std::fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"<redacted>")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

/// Issued token as returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Seconds until expiry
    pub expires_in: i64,
    /// Expiry as Unix seconds
    pub expires_at: i64,
}

/// Issues and verifies access tokens with one shared secret
#[derive(Clone)]
pub struct TokenSigner {
    ttl_minutes: i64,
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish_non_exhaustive()
    }
}

impl TokenSigner {
    pub fn new(settings: TokenSettings) -> Self {
        let key = settings.secret.as_bytes();
        Self {
            ttl_minutes: settings.ttl_minutes,
            encoding: EncodingKey::from_secret(key),
            decoding: DecodingKey::from_secret(key),
        }
    }

    /// Sign a token for `user`, valid for the configured lifetime.
    ///
    /// A lifetime outside chrono's range is `TokenGenerationFailed`.
    pub fn issue(&self, user: &User) -> AuthResult<TokenResponse> {
        let ttl = Duration::try_minutes(self.ttl_minutes).ok_or(AuthError::TokenGenerationFailed)?;
        let issued = Utc::now();
        let expires = issued
            .checked_add_signed(ttl)
            .ok_or(AuthError::TokenGenerationFailed)?;
        let claims = AccessClaims {
            sub: user.id,
            email: user.email.clone(),
            iat: issued.timestamp(),
            exp: expires.timestamp(),
            iss: ISSUER.to_string(),
            aud: AUDIENCE.to_string(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| AuthError::TokenGenerationFailed)?;

        Ok(TokenResponse {
            access_token,
            token_type: "bearer",
            expires_in: ttl.num_seconds(),
            expires_at: claims.exp,
        })
    }

    /// Check signature, expiry, issuer and audience
    pub fn verify(&self, token: &str) -> AuthResult<AccessClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);
        validation.set_audience(&[AUDIENCE]);

        decode::<AccessClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::MalformedToken,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::crypto::PasswordPolicy;

    fn signer(secret: &str) -> TokenSigner {
        TokenSigner::new(TokenSettings::new(secret).with_ttl_minutes(15))
    }

    fn artist() -> User {
        User::register("artist@example.com", "password123", &PasswordPolicy::default()).unwrap()
    }

    #[test]
    fn test_issue_then_verify() {
        let signer = signer("token-test-secret");
        let user = artist();

        let issued = signer.issue(&user).unwrap();
        assert_eq!(issued.token_type, "bearer");
        assert_eq!(issued.expires_in, 15 * 60);
        assert_eq!(issued.access_token.split('.').count(), 3);

        let claims = signer.verify(&issued.access_token).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, "artist@example.com");
        assert_eq!(claims.exp, issued.expires_at);
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert!(matches!(
            signer("s").verify("not-a-token"),
            Err(AuthError::MalformedToken)
        ));
    }

    #[test]
    fn test_other_secret_fails_signature() {
        let issued = signer("secret_one").issue(&artist()).unwrap();
        assert!(matches!(
            signer("secret_two").verify(&issued.access_token),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn test_expired_token() {
        let expired = TokenSigner::new(TokenSettings::new("s").with_ttl_minutes(-120));
        let issued = expired.issue(&artist()).unwrap();
        assert!(matches!(
            signer("s").verify(&issued.access_token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_out_of_range_lifetime_fails_cleanly() {
        for minutes in [i64::MAX, 1_000_000_000_000] {
            let signer = TokenSigner::new(TokenSettings::new("s").with_ttl_minutes(minutes));
            assert!(matches!(
                signer.issue(&artist()),
                Err(AuthError::TokenGenerationFailed)
            ));
        }
    }

    #[test]
    fn test_password_hash_not_embedded() {
        let user = artist();
        let issued = signer("s").issue(&user).unwrap();
        assert!(!issued.access_token.contains(&user.password_hash));
    }

    #[test]
    fn test_settings_debug_redacts_secret() {
        let debug = format!("{:?}", TokenSettings::new("hunter2-secret"));
        assert!(!debug.contains("hunter2"));
    }
}

//! # Password Hashing
//!
//! Argon2id PHC strings for stored passwords, and random signing secrets.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::Rng;

use super::errors::{AuthError, AuthResult};

/// Length bounds for account passwords, counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_chars: 8,
            max_chars: 128,
        }
    }
}

impl PasswordPolicy {
    pub fn check(&self, password: &str) -> AuthResult<()> {
        let chars = password.chars().count();
        let problem = if chars < self.min_chars {
            format!("at least {} characters required", self.min_chars)
        } else if chars > self.max_chars {
            format!("at most {} characters allowed", self.max_chars)
        } else {
            return Ok(());
        };
        Err(AuthError::WeakPassword(problem))
    }
}

/// Salted Argon2id hash in PHC string form
pub fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let phc = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AuthError::HashingFailed)?;
    Ok(phc.to_string())
}

/// Whether `password` matches a PHC hash; unparsable hashes never match
pub fn password_matches(password: &str, phc: &str) -> bool {
    PasswordHash::new(phc)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Random 256-bit signing secret, URL-safe base64
pub fn generate_secret() -> String {
    let bytes: [u8; 32] = rand::thread_rng().gen();
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_match() {
        let phc = hash_password("brushstrokes").unwrap();
        assert!(phc.starts_with("$argon2id$"));
        assert!(password_matches("brushstrokes", &phc));
        assert!(!password_matches("Brushstrokes", &phc));
    }

    #[test]
    fn test_salts_differ() {
        assert_ne!(hash_password("same").unwrap(), hash_password("same").unwrap());
    }

    #[test]
    fn test_garbage_hash_never_matches() {
        assert!(!password_matches("anything", "not-a-phc-string"));
        assert!(!password_matches("", ""));
    }

    #[test]
    fn test_policy_bounds() {
        let policy = PasswordPolicy::default();
        assert!(matches!(policy.check("short"), Err(AuthError::WeakPassword(_))));
        assert!(policy.check("eight ch").is_ok());
        assert!(policy.check(&"é".repeat(128)).is_ok());
        assert!(policy.check(&"x".repeat(129)).is_err());
    }

    #[test]
    fn test_secret_shape() {
        let secret = generate_secret();
        assert_eq!(secret.len(), 43);
        assert!(!secret.contains('='));
        assert_ne!(secret, generate_secret());
    }
}

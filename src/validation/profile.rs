//! # Profile Validators

use super::policy::ValidationPolicy;
use super::result::ValidationResult;

/// Validate a username with the default policy
pub fn validate_username(username: &str) -> ValidationResult {
    ValidationPolicy::default().validate_username(username)
}

impl ValidationPolicy {
    /// Required; letters, digits, `_` and `-` only.
    ///
    /// Usernames double as gallery subdomains, so they are also capped at one
    /// DNS label.
    pub fn validate_username(&self, username: &str) -> ValidationResult {
        let username = username.trim();
        if username.is_empty() {
            return ValidationResult::fail("Username is required");
        }

        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return ValidationResult::fail(
                "Username can only contain letters, numbers, underscores, and hyphens.",
            );
        }

        if username.chars().count() > self.username_max_chars {
            return ValidationResult::fail(format!(
                "Username must be at most {} characters",
                self.username_max_chars
            ));
        }

        ValidationResult::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(validate_username("ink_and-paper42").is_valid);
        assert_eq!(
            validate_username("  ").error.as_deref(),
            Some("Username is required")
        );
        assert!(!validate_username("with space").is_valid);
        assert!(!validate_username("dot.name").is_valid);
        assert!(!validate_username("émile").is_valid);
        assert!(!validate_username(&"a".repeat(64)).is_valid);
    }
}

//! # Artwork Validators
//!
//! Title, description, platform link and image file checks.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use super::policy::ValidationPolicy;
use super::result::ValidationResult;

/// Script-like substrings rejected in free text (case-insensitive)
const DANGEROUS_PATTERN: &str = r"(?i)<script|javascript:|data:text/html|vbscript:|onload|onerror";

fn dangerous_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(DANGEROUS_PATTERN).expect("dangerous pattern is a valid regex"))
}

/// Whether `text` matches the dangerous-content denylist
pub fn contains_dangerous_content(text: &str) -> bool {
    dangerous_pattern().is_match(text)
}

/// Anything that looks like an uploaded file
pub trait FileInfo {
    /// Size in bytes
    fn size(&self) -> u64;

    /// Declared MIME type
    fn content_type(&self) -> &str;

    /// Client-supplied file name, including extension
    fn name(&self) -> &str;
}

/// File metadata without a body, as described by an upload form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub content_type: String,
    pub size: u64,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            size,
        }
    }
}

impl FileInfo for ImageFile {
    fn size(&self) -> u64 {
        self.size
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Validate a title with the default policy
pub fn validate_title(title: &str) -> ValidationResult {
    ValidationPolicy::default().validate_title(title)
}

/// Validate a description with the default policy
pub fn validate_description(description: &str) -> ValidationResult {
    ValidationPolicy::default().validate_description(description)
}

/// Validate a platform link with the default policy
pub fn validate_platform_link(url: &str) -> ValidationResult {
    ValidationPolicy::default().validate_platform_link(url)
}

/// Validate an image file with the default policy
pub fn validate_image_file<F: FileInfo + ?Sized>(file: &F) -> ValidationResult {
    ValidationPolicy::default().validate_image_file(file)
}

impl ValidationPolicy {
    /// Required, bounded, no script-like content.
    pub fn validate_title(&self, title: &str) -> ValidationResult {
        if title.trim().is_empty() {
            return ValidationResult::fail("Title is required");
        }

        if title.chars().count() > self.title_max_chars {
            return ValidationResult::fail(format!(
                "Title must be less than {} characters",
                self.title_max_chars
            ));
        }

        if contains_dangerous_content(title) {
            return ValidationResult::fail("Title contains invalid content");
        }

        ValidationResult::ok()
    }

    /// Optional; when present, bounded and free of script-like content.
    pub fn validate_description(&self, description: &str) -> ValidationResult {
        if description.is_empty() {
            return ValidationResult::ok();
        }

        if description.chars().count() > self.description_max_chars {
            return ValidationResult::fail(format!(
                "Description must be less than {} characters",
                self.description_max_chars
            ));
        }

        if contains_dangerous_content(description) {
            return ValidationResult::fail("Description contains invalid content");
        }

        ValidationResult::ok()
    }

    /// Optional; when present, an absolute HTTPS URL on an allow-listed host.
    ///
    /// The link is rendered as a clickable external link, so hosts are
    /// allow-listed rather than denylisted.
    pub fn validate_platform_link(&self, url: &str) -> ValidationResult {
        let url = url.trim();
        if url.is_empty() {
            return ValidationResult::ok();
        }

        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(_) => return ValidationResult::fail("Please enter a valid URL"),
        };

        if parsed.scheme() != "https" {
            return ValidationResult::fail("Platform links must use HTTPS");
        }

        let host = match parsed.host_str() {
            Some(host) => host,
            None => return ValidationResult::fail("Please enter a valid URL"),
        };

        if !self.is_platform_host(host) {
            return ValidationResult::fail("Platform link must be from a supported platform");
        }

        ValidationResult::ok()
    }

    /// Size cap, MIME allow-list and an independent extension check.
    ///
    /// The extension check catches renamed files whose declared type does not
    /// match their name.
    pub fn validate_image_file<F: FileInfo + ?Sized>(&self, file: &F) -> ValidationResult {
        if file.size() > self.max_image_bytes {
            return ValidationResult::fail(format!(
                "Image must be smaller than {}",
                self.max_image_size_label()
            ));
        }

        if !self.is_image_mime_type(file.content_type()) {
            return ValidationResult::fail("Only JPEG, PNG, WebP, and GIF images are allowed");
        }

        if !self.has_image_extension(file.name()) {
            return ValidationResult::fail("File must have a valid image extension");
        }

        ValidationResult::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_required() {
        assert_eq!(validate_title(""), ValidationResult::fail("Title is required"));
        assert_eq!(validate_title("   "), ValidationResult::fail("Title is required"));
        assert!(validate_title("Urban Geometry").is_valid);
    }

    #[test]
    fn test_title_length_counts_characters() {
        assert!(validate_title(&"a".repeat(100)).is_valid);
        assert!(!validate_title(&"a".repeat(101)).is_valid);

        // 100 multi-byte characters are still within the limit
        assert!(validate_title(&"é".repeat(100)).is_valid);
    }

    #[test]
    fn test_title_rejects_dangerous_content() {
        for title in [
            "<script>alert(1)</script>",
            "<SCRIPT src=x>",
            "javascript:alert(1)",
            "data:text/html;base64,xyz",
            "VBScript:msgbox",
            "img onload=x",
            "img OnError=x",
        ] {
            let result = validate_title(title);
            assert!(!result.is_valid, "{title} should be rejected");
            assert_eq!(result.error.as_deref(), Some("Title contains invalid content"));
        }
    }

    #[test]
    fn test_description_optional() {
        assert!(validate_description("").is_valid);
        assert!(validate_description(&"d".repeat(1000)).is_valid);
        assert_eq!(
            validate_description(&"d".repeat(1001)).error.as_deref(),
            Some("Description must be less than 1000 characters")
        );
        assert_eq!(
            validate_description("nice <ScRiPt>").error.as_deref(),
            Some("Description contains invalid content")
        );
    }

    #[test]
    fn test_platform_link_rules() {
        assert!(validate_platform_link("").is_valid);
        assert!(validate_platform_link("   ").is_valid);
        assert!(validate_platform_link("https://instagram.com/p/x").is_valid);
        assert!(validate_platform_link("https://www.artstation.com/artwork/abc").is_valid);
        assert!(validate_platform_link("https://X.com/user/status/1").is_valid);

        assert_eq!(
            validate_platform_link("http://instagram.com/p/x").error.as_deref(),
            Some("Platform links must use HTTPS")
        );
        assert_eq!(
            validate_platform_link("https://evil.com/p/x").error.as_deref(),
            Some("Platform link must be from a supported platform")
        );
        assert_eq!(
            validate_platform_link("not a url").error.as_deref(),
            Some("Please enter a valid URL")
        );
    }

    #[test]
    fn test_platform_link_lookalike_hosts() {
        assert!(!validate_platform_link("https://instagram.com.evil.net/p").is_valid);
        assert!(!validate_platform_link("https://evil.net/instagram.com").is_valid);
        assert!(!validate_platform_link("https://user@evil.net").is_valid);
    }

    #[test]
    fn test_image_file_accepts_allowed() {
        let file = ImageFile::new("piece.png", "image/png", 1024);
        assert!(validate_image_file(&file).is_valid);
    }

    #[test]
    fn test_image_file_rejects_renamed() {
        let file = ImageFile::new("piece.exe", "image/png", 1024);
        assert_eq!(
            validate_image_file(&file).error.as_deref(),
            Some("File must have a valid image extension")
        );
    }

    #[test]
    fn test_image_file_rejects_type_and_size() {
        let svg = ImageFile::new("piece.png", "image/svg+xml", 1024);
        assert_eq!(
            validate_image_file(&svg).error.as_deref(),
            Some("Only JPEG, PNG, WebP, and GIF images are allowed")
        );

        let large = ImageFile::new("piece.png", "image/png", 5 * 1024 * 1024 + 1);
        assert_eq!(
            validate_image_file(&large).error.as_deref(),
            Some("Image must be smaller than 5MB")
        );

        let at_cap = ImageFile::new("piece.png", "image/png", 5 * 1024 * 1024);
        assert!(validate_image_file(&at_cap).is_valid);
    }

    #[test]
    fn test_relaxed_policy_cap() {
        let policy = ValidationPolicy::with_max_image_bytes(50 * 1024 * 1024);
        let file = ImageFile::new("big.webp", "image/webp", 20 * 1024 * 1024);
        assert!(policy.validate_image_file(&file).is_valid);
        assert!(!validate_image_file(&file).is_valid);
    }

    #[test]
    fn test_overridden_hosts() {
        let policy = ValidationPolicy {
            platform_hosts: vec!["cara.app".to_string()],
            ..Default::default()
        };
        assert!(policy.validate_platform_link("https://cara.app/me").is_valid);
        assert!(!policy.validate_platform_link("https://instagram.com/p/x").is_valid);
    }
}

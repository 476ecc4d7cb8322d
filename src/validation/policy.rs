//! # Validation Policy
//!
//! Named, overridable allow-lists and limits. Validators read these values
//! instead of inline literals so policy changes never touch validator logic.

use serde::{Deserialize, Serialize};

/// Maximum title length in characters
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum description length in characters
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Maximum username length in characters (one DNS label)
pub const USERNAME_MAX_CHARS: usize = 63;

/// Default image size cap: 5 MiB
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Hosts accepted for platform links, canonical and `www.` forms
pub const PLATFORM_HOSTS: &[&str] = &[
    "instagram.com",
    "www.instagram.com",
    "twitter.com",
    "www.twitter.com",
    "x.com",
    "www.x.com",
    "artstation.com",
    "www.artstation.com",
    "deviantart.com",
    "www.deviantart.com",
    "behance.net",
    "www.behance.net",
    "dribbble.com",
    "www.dribbble.com",
];

/// Declared content types accepted for uploads
pub const IMAGE_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
];

/// File name extensions accepted for uploads
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp", ".gif"];

/// Validation policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    #[serde(default = "default_title_max")]
    pub title_max_chars: usize,

    #[serde(default = "default_description_max")]
    pub description_max_chars: usize,

    #[serde(default = "default_username_max")]
    pub username_max_chars: usize,

    /// Upload cap in bytes
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,

    #[serde(default = "default_platform_hosts")]
    pub platform_hosts: Vec<String>,

    #[serde(default = "default_image_mime_types")]
    pub image_mime_types: Vec<String>,

    #[serde(default = "default_image_extensions")]
    pub image_extensions: Vec<String>,
}

fn default_title_max() -> usize {
    TITLE_MAX_CHARS
}

fn default_description_max() -> usize {
    DESCRIPTION_MAX_CHARS
}

fn default_username_max() -> usize {
    USERNAME_MAX_CHARS
}

fn default_max_image_bytes() -> u64 {
    DEFAULT_MAX_IMAGE_BYTES
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_platform_hosts() -> Vec<String> {
    to_owned_list(PLATFORM_HOSTS)
}

fn default_image_mime_types() -> Vec<String> {
    to_owned_list(IMAGE_MIME_TYPES)
}

fn default_image_extensions() -> Vec<String> {
    to_owned_list(IMAGE_EXTENSIONS)
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            title_max_chars: default_title_max(),
            description_max_chars: default_description_max(),
            username_max_chars: default_username_max(),
            max_image_bytes: default_max_image_bytes(),
            platform_hosts: default_platform_hosts(),
            image_mime_types: default_image_mime_types(),
            image_extensions: default_image_extensions(),
        }
    }
}

impl ValidationPolicy {
    /// Default policy with a different upload cap
    pub fn with_max_image_bytes(max_image_bytes: u64) -> Self {
        Self {
            max_image_bytes,
            ..Default::default()
        }
    }

    /// Whether `host` is exactly one of the allow-listed platform hosts
    pub fn is_platform_host(&self, host: &str) -> bool {
        self.platform_hosts.iter().any(|allowed| allowed == host)
    }

    /// Whether the declared content type is allow-listed
    pub fn is_image_mime_type(&self, content_type: &str) -> bool {
        let content_type = content_type.trim().to_ascii_lowercase();
        self.image_mime_types.iter().any(|allowed| *allowed == content_type)
    }

    /// Whether the file name ends with an allow-listed extension (case-insensitive)
    pub fn has_image_extension(&self, file_name: &str) -> bool {
        let file_name = file_name.to_lowercase();
        self.image_extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    }

    /// Human-readable form of the upload cap, e.g. `5MB`
    pub fn max_image_size_label(&self) -> String {
        format_size(self.max_image_bytes)
    }
}

/// Format a byte count the way the upload form labels it
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;

    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else if bytes >= KIB && bytes % KIB == 0 {
        format!("{}KB", bytes / KIB)
    } else {
        format!("{} bytes", bytes)
    }
}

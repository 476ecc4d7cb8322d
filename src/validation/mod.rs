//! # Input Validation & Sanitization
//!
//! Pure gatekeepers for artwork metadata and uploaded image files.
//!
//! Every validator returns a [`ValidationResult`]; none of them panic or
//! return `Err` for user input. Malformed URLs are folded into a failing
//! result inside [`validate_platform_link`].
//!
//! Allow-lists and limits live in [`ValidationPolicy`]. The free functions
//! use the default (strict) policy; call the policy methods to apply an
//! overridden one.

pub mod artwork;
pub mod policy;
pub mod profile;
pub mod result;
pub mod sanitize;

pub use artwork::{
    validate_description, validate_image_file, validate_platform_link, validate_title, FileInfo,
    ImageFile,
};
pub use policy::ValidationPolicy;
pub use profile::validate_username;
pub use result::ValidationResult;
pub use sanitize::sanitize_text;

//! # Image Storage
//!
//! Object storage for uploaded artwork images: a pluggable byte backend plus
//! an [`ImageStore`] that names objects and builds their public URLs.

pub mod backend;
pub mod errors;
pub mod image_store;
pub mod local;

pub use backend::ObjectBackend;
pub use errors::{StorageError, StorageResult};
pub use image_store::{ImageStore, StoredImage};
pub use local::LocalBackend;

//! # Gallery
//!
//! Artworks, artist profiles and the public galleries built from them.
//!
//! Every write goes through [`GalleryService`]: drafts are trimmed,
//! validated and sanitized before they are persisted, and only the owner of
//! an artwork may change it.

pub mod artwork;
pub mod errors;
pub mod profile;
pub mod sample;
pub mod scope;
pub mod search;
pub mod service;
pub mod share;
pub mod upload;

pub use artwork::{Artwork, ArtworkDraft, ArtworkRepository, DraftValidation, StoredArtworkRepository};
pub use errors::{GalleryError, GalleryResult};
pub use profile::{Profile, ProfileRepository, ProfileUpdate, StoredProfileRepository};
pub use sample::sample_artworks;
pub use scope::{resolve_gallery_scope, GalleryScope};
pub use search::{empty_message, filter_artworks, matches_query};
pub use service::{GalleryPage, GalleryService};
pub use share::ShareMetadata;
pub use upload::ImageUpload;

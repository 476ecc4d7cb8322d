//! # Gallery Errors

use thiserror::Error;
use uuid::Uuid;

use crate::file_storage::StorageError;
use crate::store::StoreError;

/// Result type for gallery operations
pub type GalleryResult<T> = Result<T, GalleryError>;

/// Gallery errors
#[derive(Debug, Clone, Error)]
pub enum GalleryError {
    /// User input failed validation; the message is shown to the user as is
    #[error("{0}")]
    Validation(String),

    #[error("Artwork not found: {0}")]
    ArtworkNotFound(Uuid),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("This username is already taken")]
    UsernameTaken,

    #[error("You can only modify your own artworks")]
    NotOwner,

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl GalleryError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            GalleryError::Validation(_) => 400,
            GalleryError::ArtworkNotFound(_) => 404,
            GalleryError::ProfileNotFound(_) => 404,
            GalleryError::UsernameTaken => 409,
            GalleryError::NotOwner => 403,
            GalleryError::Storage(e) => e.status_code(),
            GalleryError::Store(e) => e.status_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(GalleryError::Validation("Title is required".into()).status_code(), 400);
        assert_eq!(GalleryError::ArtworkNotFound(Uuid::nil()).status_code(), 404);
        assert_eq!(GalleryError::UsernameTaken.status_code(), 409);
        assert_eq!(GalleryError::NotOwner.status_code(), 403);
        assert_eq!(
            GalleryError::from(StorageError::ImageTooLarge { size: 10, max: 5 }).status_code(),
            413
        );
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = GalleryError::Validation("Please select an image file.".into());
        assert_eq!(err.to_string(), "Please select an image file.");
        assert_eq!(GalleryError::UsernameTaken.to_string(), "This username is already taken");
    }
}

//! # Artworks
//!
//! Artwork records, form drafts and the persisted artwork repository.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{GalleryError, GalleryResult};
use crate::store::{load_json, save_json, KeyValueStore};
use crate::validation::{sanitize_text, FileInfo, ValidationPolicy, ValidationResult};

/// Store key for persisted artworks
pub const ARTWORKS_KEY: &str = "artworks";

/// A published artwork
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_url: String,
    /// Hex SHA-256 of the stored image; absent for externally hosted images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_sha256: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Artwork fields as submitted by the upload form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub platform_link: Option<String>,
}

/// Per-field validation outcome of a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftValidation {
    pub title: ValidationResult,
    pub description: ValidationResult,
    pub platform_link: ValidationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ValidationResult>,
}

impl DraftValidation {
    pub fn is_valid(&self) -> bool {
        self.first_error().is_none()
    }

    /// First failing message in form order
    pub fn first_error(&self) -> Option<&str> {
        [
            Some(&self.title),
            Some(&self.description),
            Some(&self.platform_link),
            self.image.as_ref(),
        ]
        .into_iter()
        .flatten()
        .find_map(|result| result.error.as_deref())
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ArtworkDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_platform_link(mut self, link: impl Into<String>) -> Self {
        self.platform_link = Some(link.into());
        self
    }

    /// Trimmed copy; blank optional fields become `None`
    pub fn normalized(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: blank_to_none(self.description.clone()),
            platform_link: blank_to_none(self.platform_link.clone()),
        }
    }

    /// Validate every field, plus the image when one is given
    pub fn validate<F: FileInfo + ?Sized>(
        &self,
        policy: &ValidationPolicy,
        image: Option<&F>,
    ) -> DraftValidation {
        let draft = self.normalized();
        DraftValidation {
            title: policy.validate_title(&draft.title),
            description: policy.validate_description(draft.description.as_deref().unwrap_or("")),
            platform_link: policy
                .validate_platform_link(draft.platform_link.as_deref().unwrap_or("")),
            image: image.map(|file| policy.validate_image_file(file)),
        }
    }

    /// Validated, sanitized field values ready to persist
    pub fn into_clean_fields(
        self,
        policy: &ValidationPolicy,
    ) -> GalleryResult<(String, Option<String>, Option<String>)> {
        let validation = self.validate::<crate::validation::ImageFile>(policy, None);
        if let Some(error) = validation.first_error() {
            return Err(GalleryError::Validation(error.to_string()));
        }

        let draft = self.normalized();
        Ok((
            sanitize_text(&draft.title),
            draft.description.as_deref().map(sanitize_text),
            draft.platform_link,
        ))
    }
}

/// Artwork persistence
pub trait ArtworkRepository: Send + Sync + std::fmt::Debug {
    /// All artworks, newest first
    fn list(&self) -> GalleryResult<Vec<Artwork>>;

    fn get(&self, id: Uuid) -> GalleryResult<Option<Artwork>>;

    fn insert(&self, artwork: &Artwork) -> GalleryResult<()>;

    fn update(&self, artwork: &Artwork) -> GalleryResult<()>;

    fn delete(&self, id: Uuid) -> GalleryResult<()>;
}

/// Artwork repository persisted in a [`KeyValueStore`]
#[derive(Debug)]
pub struct StoredArtworkRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl StoredArtworkRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    fn load(&self) -> GalleryResult<Vec<Artwork>> {
        Ok(load_json(self.store.as_ref(), ARTWORKS_KEY)?.unwrap_or_default())
    }

    fn modify<F>(&self, f: F) -> GalleryResult<()>
    where
        F: FnOnce(&mut Vec<Artwork>) -> GalleryResult<()>,
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| crate::store::StoreError::Internal("Lock poisoned".to_string()))?;
        let mut artworks = self.load()?;
        f(&mut artworks)?;
        artworks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        save_json(self.store.as_ref(), ARTWORKS_KEY, &artworks)?;
        Ok(())
    }
}

impl ArtworkRepository for StoredArtworkRepository {
    fn list(&self) -> GalleryResult<Vec<Artwork>> {
        let mut artworks = self.load()?;
        artworks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(artworks)
    }

    fn get(&self, id: Uuid) -> GalleryResult<Option<Artwork>> {
        Ok(self.load()?.into_iter().find(|a| a.id == id))
    }

    fn insert(&self, artwork: &Artwork) -> GalleryResult<()> {
        self.modify(|artworks| {
            artworks.push(artwork.clone());
            Ok(())
        })
    }

    fn update(&self, artwork: &Artwork) -> GalleryResult<()> {
        self.modify(|artworks| match artworks.iter_mut().find(|a| a.id == artwork.id) {
            Some(existing) => {
                *existing = artwork.clone();
                Ok(())
            }
            None => Err(GalleryError::ArtworkNotFound(artwork.id)),
        })
    }

    fn delete(&self, id: Uuid) -> GalleryResult<()> {
        self.modify(|artworks| {
            let len_before = artworks.len();
            artworks.retain(|a| a.id != id);
            if artworks.len() == len_before {
                Err(GalleryError::ArtworkNotFound(id))
            } else {
                Ok(())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::validation::ImageFile;
    use chrono::Duration;

    fn artwork(title: &str, age_days: i64) -> Artwork {
        Artwork {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            image_url: "http://localhost/media/a.png".to_string(),
            image_sha256: None,
            platform_link: None,
            created_at: Utc::now() - Duration::days(age_days),
        }
    }

    #[test]
    fn test_draft_normalization() {
        let draft = ArtworkDraft {
            title: "  Dusk  ".to_string(),
            description: Some("   ".to_string()),
            platform_link: Some(" https://behance.net/x ".to_string()),
        };
        let normalized = draft.normalized();
        assert_eq!(normalized.title, "Dusk");
        assert_eq!(normalized.description, None);
        assert_eq!(normalized.platform_link.as_deref(), Some("https://behance.net/x"));
    }

    #[test]
    fn test_draft_validation_reports_each_field() {
        let policy = ValidationPolicy::default();
        let draft = ArtworkDraft::new("")
            .with_description("<script>")
            .with_platform_link("http://instagram.com/p/1");
        let image = ImageFile::new("a.svg", "image/svg+xml", 10);

        let result = draft.validate(&policy, Some(&image));
        assert!(!result.is_valid());
        assert_eq!(result.first_error(), Some("Title is required"));
        assert!(!result.description.is_valid);
        assert!(!result.platform_link.is_valid);
        assert!(!result.image.as_ref().unwrap().is_valid);
    }

    #[test]
    fn test_clean_fields_are_sanitized() {
        let policy = ValidationPolicy::default();
        let (title, description, link) = ArtworkDraft::new("Light & \"Shade\"")
            .with_description("Ink/paper")
            .into_clean_fields(&policy)
            .unwrap();

        assert_eq!(title, "Light & &quot;Shade&quot;");
        assert_eq!(description.as_deref(), Some("Ink&#x2F;paper"));
        assert_eq!(link, None);
    }

    #[test]
    fn test_clean_fields_reject_invalid() {
        let policy = ValidationPolicy::default();
        let err = ArtworkDraft::new("javascript:alert(1)")
            .into_clean_fields(&policy)
            .unwrap_err();
        assert_eq!(err.to_string(), "Title contains invalid content");
    }

    #[test]
    fn test_repository_orders_newest_first() {
        let repo = StoredArtworkRepository::new(Arc::new(MemoryStore::new()));
        let old = artwork("old", 5);
        let new = artwork("new", 1);
        let middle = artwork("middle", 3);

        repo.insert(&old).unwrap();
        repo.insert(&new).unwrap();
        repo.insert(&middle).unwrap();

        let titles: Vec<_> = repo.list().unwrap().into_iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["new", "middle", "old"]);
    }

    #[test]
    fn test_repository_update_and_delete() {
        let repo = StoredArtworkRepository::new(Arc::new(MemoryStore::new()));
        let mut piece = artwork("piece", 0);
        repo.insert(&piece).unwrap();

        piece.title = "renamed".to_string();
        repo.update(&piece).unwrap();
        assert_eq!(repo.get(piece.id).unwrap().unwrap().title, "renamed");

        repo.delete(piece.id).unwrap();
        assert!(repo.get(piece.id).unwrap().is_none());
        assert!(matches!(
            repo.delete(piece.id),
            Err(GalleryError::ArtworkNotFound(_))
        ));
        assert!(matches!(
            repo.update(&piece),
            Err(GalleryError::ArtworkNotFound(_))
        ));
    }
}

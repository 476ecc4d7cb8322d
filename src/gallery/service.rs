//! # Gallery Service
//!
//! Artwork and profile operations on behalf of an authenticated owner, plus
//! the public read side.

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::artwork::{Artwork, ArtworkDraft, ArtworkRepository, DraftValidation};
use super::errors::{GalleryError, GalleryResult};
use super::profile::{Profile, ProfileRepository, ProfileUpdate};
use super::sample::sample_artworks;
use super::scope::GalleryScope;
use super::search::{empty_message, filter_artworks};
use super::upload::ImageUpload;
use crate::auth::AuthContext;
use crate::file_storage::{ImageStore, ObjectBackend, StoredImage};
use crate::validation::{sanitize_text, FileInfo, ValidationPolicy};

/// Message when an artwork is created without an image
pub const IMAGE_REQUIRED_MESSAGE: &str = "Please select an image file.";

/// Default domain user galleries live under
pub const DEFAULT_ROOT_DOMAIN: &str = "gallery.com";

/// Public gallery listing
#[derive(Debug, Clone, Serialize)]
pub struct GalleryPage {
    pub scope: GalleryScope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Profile>,
    pub artworks: Vec<Artwork>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

/// Gallery service
#[derive(Debug)]
pub struct GalleryService<B: ObjectBackend> {
    artworks: Box<dyn ArtworkRepository>,
    profiles: Box<dyn ProfileRepository>,
    images: ImageStore<B>,
    policy: ValidationPolicy,
    root_domain: String,
}

impl<B: ObjectBackend> GalleryService<B> {
    pub fn new(
        artworks: Box<dyn ArtworkRepository>,
        profiles: Box<dyn ProfileRepository>,
        images: ImageStore<B>,
        policy: ValidationPolicy,
    ) -> Self {
        Self {
            artworks,
            profiles,
            images,
            policy,
            root_domain: DEFAULT_ROOT_DOMAIN.to_string(),
        }
    }

    pub fn with_root_domain(mut self, root_domain: impl Into<String>) -> Self {
        self.root_domain = root_domain.into();
        self
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    pub fn images(&self) -> &ImageStore<B> {
        &self.images
    }

    pub fn root_domain(&self) -> &str {
        &self.root_domain
    }

    // ==================
    // Artworks
    // ==================

    /// Validate a draft without persisting anything
    pub fn validate_draft<F: FileInfo + ?Sized>(
        &self,
        draft: &ArtworkDraft,
        image: Option<&F>,
    ) -> DraftValidation {
        draft.validate(&self.policy, image)
    }

    /// Create an artwork; an image is required
    pub fn create_artwork(
        &self,
        ctx: &AuthContext,
        draft: ArtworkDraft,
        image: Option<ImageUpload>,
    ) -> GalleryResult<Artwork> {
        let (title, description, platform_link) = draft.into_clean_fields(&self.policy)?;
        let image = image.ok_or_else(|| GalleryError::Validation(IMAGE_REQUIRED_MESSAGE.to_string()))?;
        let stored = self.upload(&image)?;

        let artwork = Artwork {
            id: Uuid::new_v4(),
            owner_id: ctx.user_id,
            title,
            description,
            image_url: stored.public_url,
            image_sha256: Some(stored.checksum),
            platform_link,
            created_at: Utc::now(),
        };

        if let Err(e) = self.artworks.insert(&artwork) {
            self.discard_image(&artwork.image_url);
            return Err(e);
        }

        info!(artwork_id = %artwork.id, owner_id = %ctx.user_id, "artwork created");
        Ok(artwork)
    }

    /// Update an artwork's fields; the image is replaced only when one is given
    pub fn update_artwork(
        &self,
        ctx: &AuthContext,
        id: Uuid,
        draft: ArtworkDraft,
        image: Option<ImageUpload>,
    ) -> GalleryResult<Artwork> {
        let existing = self.owned_artwork(ctx, id)?;
        let (title, description, platform_link) = draft.into_clean_fields(&self.policy)?;

        let (image_url, image_sha256) = match &image {
            Some(upload) => {
                let stored = self.upload(upload)?;
                (stored.public_url, Some(stored.checksum))
            }
            None => (existing.image_url.clone(), existing.image_sha256.clone()),
        };

        let updated = Artwork {
            title,
            description,
            platform_link,
            image_url,
            image_sha256,
            ..existing.clone()
        };

        if let Err(e) = self.artworks.update(&updated) {
            if image.is_some() {
                self.discard_image(&updated.image_url);
            }
            return Err(e);
        }

        if updated.image_url != existing.image_url {
            self.discard_image(&existing.image_url);
        }

        info!(artwork_id = %id, owner_id = %ctx.user_id, "artwork updated");
        Ok(updated)
    }

    /// Delete an artwork, then its stored image on a best-effort basis
    pub fn delete_artwork(&self, ctx: &AuthContext, id: Uuid) -> GalleryResult<()> {
        let artwork = self.owned_artwork(ctx, id)?;
        self.artworks.delete(id)?;
        self.discard_image(&artwork.image_url);

        info!(artwork_id = %id, owner_id = %ctx.user_id, "artwork deleted");
        Ok(())
    }

    /// The caller's artworks, newest first
    pub fn list_for_owner(&self, owner_id: Uuid) -> GalleryResult<Vec<Artwork>> {
        Ok(self
            .artworks
            .list()?
            .into_iter()
            .filter(|a| a.owner_id == owner_id)
            .collect())
    }

    /// Number of stored artworks across all galleries
    pub fn artwork_count(&self) -> GalleryResult<usize> {
        Ok(self.artworks.list()?.len())
    }

    pub fn get_artwork(&self, id: Uuid) -> GalleryResult<Artwork> {
        self.artworks.get(id)?.ok_or(GalleryError::ArtworkNotFound(id))
    }

    /// Public listing for a scope, filtered by `query`
    pub fn public_gallery(&self, scope: &GalleryScope, query: &str) -> GalleryResult<GalleryPage> {
        let (owner, artworks) = match scope {
            GalleryScope::Main => (None, self.artworks.list()?),
            GalleryScope::User(username) => {
                let profile = self.profile_by_username(username)?;
                let artworks = self.list_for_owner(profile.id)?;
                (Some(profile), artworks)
            }
        };

        let artworks = filter_artworks(artworks, query);
        let empty_message = artworks.is_empty().then(|| empty_message(query));

        Ok(GalleryPage {
            scope: scope.clone(),
            owner,
            artworks,
            empty_message,
        })
    }

    /// Seed the demo artworks into an empty store; returns how many were added
    pub fn seed_sample_artworks(&self) -> GalleryResult<usize> {
        if !self.artworks.list()?.is_empty() {
            return Ok(0);
        }

        let samples = sample_artworks();
        for artwork in &samples {
            self.artworks.insert(artwork)?;
        }
        info!(count = samples.len(), "seeded sample artworks");
        Ok(samples.len())
    }

    fn owned_artwork(&self, ctx: &AuthContext, id: Uuid) -> GalleryResult<Artwork> {
        let artwork = self.get_artwork(id)?;
        if !ctx.owns(artwork.owner_id) {
            warn!(artwork_id = %id, caller = %ctx.user_id, "rejected edit of foreign artwork");
            return Err(GalleryError::NotOwner);
        }
        Ok(artwork)
    }

    fn upload(&self, image: &ImageUpload) -> GalleryResult<StoredImage> {
        self.policy
            .validate_image_file(image)
            .into_result()
            .map_err(GalleryError::Validation)?;

        let stored = self
            .images
            .put(&image.file_name, &image.data, &image.content_type)?;
        info!(
            object = %stored.object_name,
            size = stored.size,
            sha256 = %stored.checksum,
            "image uploaded"
        );
        Ok(stored)
    }

    fn discard_image(&self, url: &str) {
        if let Err(e) = self.images.remove_by_url(url) {
            warn!(url = %url, error = %e, "could not delete image from storage");
        }
    }

    // ==================
    // Profiles
    // ==================

    /// Create the profile for a newly signed-up user
    pub fn create_profile(&self, user_id: Uuid, username: &str) -> GalleryResult<Profile> {
        let username = self.checked_username(username, user_id)?;
        let profile = Profile::new(user_id, username);
        self.profiles.save(&profile)?;
        info!(user_id = %user_id, username = %profile.username, "profile created");
        Ok(profile)
    }

    pub fn get_profile(&self, user_id: Uuid) -> GalleryResult<Profile> {
        self.profiles
            .find_by_id(user_id)?
            .ok_or_else(|| GalleryError::ProfileNotFound(user_id.to_string()))
    }

    pub fn profile_by_username(&self, username: &str) -> GalleryResult<Profile> {
        self.profiles
            .find_by_username(username)?
            .ok_or_else(|| GalleryError::ProfileNotFound(username.to_string()))
    }

    /// Whether `username` is free for `user_id` to take
    pub fn username_available(&self, username: &str, user_id: Uuid) -> GalleryResult<bool> {
        Ok(match self.profiles.find_by_username(username.trim())? {
            Some(existing) => existing.id == user_id,
            None => true,
        })
    }

    /// Update username, display name and bio
    pub fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> GalleryResult<Profile> {
        let mut profile = self.get_profile(user_id)?;
        let username = self.checked_username(&update.username, user_id)?;

        let bio = update
            .bio
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());
        self.policy
            .validate_description(bio.as_deref().unwrap_or(""))
            .into_result()
            .map_err(|e| GalleryError::Validation(e.replace("Description", "Bio")))?;

        let display_name = update
            .display_name
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| username.clone());
        self.policy
            .validate_title(&display_name)
            .into_result()
            .map_err(|e| GalleryError::Validation(e.replace("Title", "Display name")))?;

        profile.display_name = sanitize_text(&display_name);
        profile.bio = bio.as_deref().map(sanitize_text);
        profile.username = username;
        profile.updated_at = Utc::now();
        self.profiles.save(&profile)?;

        info!(user_id = %user_id, username = %profile.username, "profile updated");
        Ok(profile)
    }

    pub fn gallery_url(&self, profile: &Profile) -> String {
        profile.gallery_url(&self.root_domain)
    }

    fn checked_username(&self, username: &str, user_id: Uuid) -> GalleryResult<String> {
        let username = username.trim();
        self.policy
            .validate_username(username)
            .into_result()
            .map_err(GalleryError::Validation)?;
        if !self.username_available(username, user_id)? {
            return Err(GalleryError::UsernameTaken);
        }
        Ok(username.to_string())
    }
}

//! Shared application state

use std::path::Path;
use std::sync::Arc;

use axum::http::HeaderMap;

use super::errors::{api_error, error_with, ApiError};
use crate::auth::{
    crypto::generate_secret, AuthContext, AuthService, StoredUserRepository, TokenSettings,
    TokenSigner,
};
use crate::file_storage::{ImageStore, LocalBackend};
use crate::gallery::{GalleryService, StoredArtworkRepository, StoredProfileRepository};
use crate::layout::{Breakpoints, ScrollConfig};
use crate::store::{KeyValueStore, MemoryStore};
use crate::validation::ValidationPolicy;

/// State shared by every router
#[derive(Debug)]
pub struct AppState {
    pub auth: AuthService<StoredUserRepository>,
    pub gallery: GalleryService<LocalBackend>,
    pub breakpoints: Breakpoints,
    pub scroll: ScrollConfig,
    /// Hosts that serve the main gallery rather than a user's
    pub main_domains: Vec<String>,
}

impl AppState {
    pub fn new(auth: AuthService<StoredUserRepository>, gallery: GalleryService<LocalBackend>) -> Self {
        Self {
            auth,
            gallery,
            breakpoints: Breakpoints::default(),
            scroll: ScrollConfig::default(),
            main_domains: vec![crate::gallery::service::DEFAULT_ROOT_DOMAIN.to_string()],
        }
    }

    pub fn with_main_domains(mut self, main_domains: Vec<String>) -> Self {
        self.main_domains = main_domains;
        self
    }

    /// Wire services over one key-value store and a media directory
    pub fn build(
        store: Arc<dyn KeyValueStore>,
        media_dir: &Path,
        public_base_url: &str,
        tokens: TokenSettings,
        policy: ValidationPolicy,
    ) -> Self {
        let images = ImageStore::new(
            LocalBackend::new(media_dir.to_path_buf()),
            format!("{}/media", public_base_url.trim_end_matches('/')),
            policy.max_image_bytes,
        );
        let gallery = GalleryService::new(
            Box::new(StoredArtworkRepository::new(store.clone())),
            Box::new(StoredProfileRepository::new(store.clone())),
            images,
            policy,
        );
        let auth = AuthService::new(StoredUserRepository::new(store), TokenSigner::new(tokens));
        Self::new(auth, gallery)
    }

    /// Memory-backed state with a random signing secret, for tests and demos
    pub fn in_memory(media_dir: &Path, public_base_url: &str) -> Self {
        Self::build(
            Arc::new(MemoryStore::new()),
            media_dir,
            public_base_url,
            TokenSettings::new(generate_secret()),
            ValidationPolicy::default(),
        )
    }

    /// Resolve the caller from an `Authorization: Bearer` header
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<AuthContext, ApiError> {
        let token = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                error_with(
                    axum::http::StatusCode::UNAUTHORIZED,
                    "Missing authorization header",
                )
            })?;

        self.auth.validate_access_token(token).map_err(api_error)
    }
}

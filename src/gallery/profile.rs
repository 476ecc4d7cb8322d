//! # Profiles
//!
//! Public artist profiles. The username doubles as the gallery subdomain.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{GalleryError, GalleryResult};
use crate::store::{load_json, save_json, KeyValueStore, StoreError};

/// Store key for persisted profiles
pub const PROFILES_KEY: &str = "profiles";

/// Artist profile; `id` is the owning user's id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(id: Uuid, username: impl Into<String>) -> Self {
        let username = username.into();
        let now = Utc::now();
        Self {
            id,
            display_name: username.clone(),
            username,
            bio: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Public gallery address, `https://<username>.<root_domain>`
    pub fn gallery_url(&self, root_domain: &str) -> String {
        format!("https://{}.{}", self.username.to_lowercase(), root_domain)
    }
}

/// Editable profile fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Profile persistence
pub trait ProfileRepository: Send + Sync + std::fmt::Debug {
    fn find_by_id(&self, id: Uuid) -> GalleryResult<Option<Profile>>;

    /// Usernames compare case-insensitively since hosts are case-insensitive
    fn find_by_username(&self, username: &str) -> GalleryResult<Option<Profile>>;

    /// Insert or replace by id
    fn save(&self, profile: &Profile) -> GalleryResult<()>;
}

/// Profile repository persisted in a [`KeyValueStore`]
#[derive(Debug)]
pub struct StoredProfileRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl StoredProfileRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    fn load(&self) -> GalleryResult<Vec<Profile>> {
        Ok(load_json(self.store.as_ref(), PROFILES_KEY)?.unwrap_or_default())
    }

    fn modify<F>(&self, f: F) -> GalleryResult<()>
    where
        F: FnOnce(&mut Vec<Profile>) -> GalleryResult<()>,
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?;
        let mut profiles = self.load()?;
        f(&mut profiles)?;
        save_json(self.store.as_ref(), PROFILES_KEY, &profiles)?;
        Ok(())
    }
}

impl ProfileRepository for StoredProfileRepository {
    fn find_by_id(&self, id: Uuid) -> GalleryResult<Option<Profile>> {
        Ok(self.load()?.into_iter().find(|p| p.id == id))
    }

    fn find_by_username(&self, username: &str) -> GalleryResult<Option<Profile>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|p| p.username.eq_ignore_ascii_case(username)))
    }

    fn save(&self, profile: &Profile) -> GalleryResult<()> {
        self.modify(|profiles| {
            if profiles
                .iter()
                .any(|p| p.id != profile.id && p.username.eq_ignore_ascii_case(&profile.username))
            {
                return Err(GalleryError::UsernameTaken);
            }

            match profiles.iter_mut().find(|p| p.id == profile.id) {
                Some(existing) => *existing = profile.clone(),
                None => profiles.push(profile.clone()),
            }
            Ok(())
        })
    }
}

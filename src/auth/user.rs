//! # Accounts
//!
//! Admin accounts and their persistence. All accounts live in one JSON list
//! under the `users` store key.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::crypto::{hash_password, password_matches, PasswordPolicy};
use super::errors::{AuthError, AuthResult};
use crate::store::{load_json, save_json, KeyValueStore, MemoryStore};

pub const USERS_KEY: &str = "users";

/// An admin account. The password is only ever held as an Argon2id hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Normalized (trimmed, lowercase)
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// New account with a fresh id; the password must satisfy `policy`
    pub fn register(email: impl Into<String>, password: &str, policy: &PasswordPolicy) -> AuthResult<Self> {
        policy.check(password)?;
        let created_at = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password_hash: hash_password(password)?,
            created_at,
            updated_at: created_at,
        })
    }

    pub fn check_password(&self, password: &str) -> bool {
        password_matches(password, &self.password_hash)
    }
}

/// Account persistence
pub trait UserRepository: Send + Sync + std::fmt::Debug {
    fn find_by_id(&self, id: Uuid) -> AuthResult<Option<User>>;

    /// Exact match on the normalized email
    fn find_by_email(&self, email: &str) -> AuthResult<Option<User>>;

    /// Add a new account; `EmailAlreadyExists` if the email is in use
    fn insert(&self, user: &User) -> AuthResult<()>;

    /// `UserNotFound` if the id is unknown
    fn delete(&self, id: Uuid) -> AuthResult<()>;
}

/// Account repository persisted in a [`KeyValueStore`]
#[derive(Debug)]
pub struct StoredUserRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl StoredUserRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Repository over a fresh [`MemoryStore`]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    fn load(&self) -> AuthResult<Vec<User>> {
        Ok(load_json(self.store.as_ref(), USERS_KEY)?.unwrap_or_default())
    }

    fn modify<F>(&self, f: F) -> AuthResult<()>
    where
        F: FnOnce(&mut Vec<User>) -> AuthResult<()>,
    {
        let _guard = self.write_lock.lock().map_err(|_| AuthError::lock_poisoned())?;
        let mut users = self.load()?;
        f(&mut users)?;
        save_json(self.store.as_ref(), USERS_KEY, &users)?;
        Ok(())
    }
}

impl UserRepository for StoredUserRepository {
    fn find_by_id(&self, id: Uuid) -> AuthResult<Option<User>> {
        Ok(self.load()?.into_iter().find(|u| u.id == id))
    }

    fn find_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        Ok(self.load()?.into_iter().find(|u| u.email == email))
    }

    fn insert(&self, user: &User) -> AuthResult<()> {
        self.modify(|users| {
            if users.iter().any(|u| u.email == user.email) {
                return Err(AuthError::EmailAlreadyExists);
            }
            users.push(user.clone());
            Ok(())
        })
    }

    fn delete(&self, id: Uuid) -> AuthResult<()> {
        self.modify(|users| {
            let index = users
                .iter()
                .position(|u| u.id == id)
                .ok_or(AuthError::UserNotFound)?;
            users.remove(index);
            Ok(())
        })
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local JSON store wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Profile (the signed-in user, namespace `auth-storage`)
//! - Catches (the saved catch collection, namespace `fish-catches`)
//!
//! Each namespace is one JSON file under the storage root, loaded at open
//! and written through on every mutation. The in-memory mode (no root)
//! backs tests and never touches disk.

use crate::db::namespaces;
use crate::error::AppError;
use crate::models::user::UserProfile;
use crate::models::{CatchRecord, CatchUpdate};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Local JSON database client.
#[derive(Clone)]
pub struct LocalDb {
    inner: Arc<Inner>,
}

struct Inner {
    /// Storage root; `None` means in-memory only.
    root: Option<PathBuf>,
    catches: RwLock<Vec<CatchRecord>>,
    profile: RwLock<Option<UserProfile>>,
}

impl LocalDb {
    /// Open the store rooted at `dir`, creating it if needed and loading
    /// any previously persisted namespaces.
    pub async fn open<P: AsRef<Path>>(dir: P) -> Result<Self, AppError> {
        let root = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to create storage dir: {}", e)))?;

        let catches: Vec<CatchRecord> =
            load_namespace(&root, namespaces::CATCHES).await?.unwrap_or_default();
        let profile: Option<UserProfile> =
            load_namespace(&root, namespaces::PROFILE).await?.unwrap_or_default();

        tracing::info!(
            path = %root.display(),
            catches = catches.len(),
            has_profile = profile.is_some(),
            "Opened local store"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                root: Some(root),
                catches: RwLock::new(catches),
                profile: RwLock::new(profile),
            }),
        })
    }

    /// Create an in-memory store for testing (nothing persists).
    pub fn new_in_memory() -> Self {
        Self {
            inner: Arc::new(Inner {
                root: None,
                catches: RwLock::new(Vec::new()),
                profile: RwLock::new(None),
            }),
        }
    }

    // ─── Catch Operations ────────────────────────────────────────

    /// All saved catches, newest first.
    pub async fn list_catches(&self) -> Vec<CatchRecord> {
        self.inner.catches.read().await.clone()
    }

    /// Look up a saved catch by id.
    pub async fn get_catch(&self, id: &str) -> Option<CatchRecord> {
        self.inner
            .catches
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Insert a catch at the front of the collection (newest first).
    pub async fn insert_catch(&self, record: CatchRecord) -> Result<(), AppError> {
        {
            let mut catches = self.inner.catches.write().await;
            catches.insert(0, record);
        }
        self.persist_catches().await
    }

    /// Apply a partial update to a saved catch. Returns the updated record,
    /// or `None` if no catch has that id.
    pub async fn update_catch(
        &self,
        id: &str,
        update: CatchUpdate,
    ) -> Result<Option<CatchRecord>, AppError> {
        let updated = {
            let mut catches = self.inner.catches.write().await;
            match catches.iter_mut().find(|c| c.id == id) {
                Some(record) => {
                    if let Some(fish_name) = update.fish_name {
                        record.fish_name = Some(fish_name);
                    }
                    if let Some(notes) = update.notes {
                        record.notes = notes;
                    }
                    if let Some(location) = update.location {
                        record.location = location;
                    }
                    Some(record.clone())
                }
                None => None,
            }
        };

        if updated.is_some() {
            self.persist_catches().await?;
        }
        Ok(updated)
    }

    /// Delete a saved catch. Returns whether a record was removed.
    pub async fn delete_catch(&self, id: &str) -> Result<bool, AppError> {
        let removed = {
            let mut catches = self.inner.catches.write().await;
            let before = catches.len();
            catches.retain(|c| c.id != id);
            catches.len() != before
        };

        if removed {
            self.persist_catches().await?;
        }
        Ok(removed)
    }

    // ─── Profile Operations ──────────────────────────────────────

    /// The signed-in user's profile, if any.
    pub async fn get_profile(&self) -> Option<UserProfile> {
        self.inner.profile.read().await.clone()
    }

    /// Store (or replace) the signed-in user's profile.
    pub async fn set_profile(&self, profile: UserProfile) -> Result<(), AppError> {
        {
            let mut slot = self.inner.profile.write().await;
            *slot = Some(profile);
        }
        self.persist_profile().await
    }

    /// Clear the signed-in user's profile (sign-out).
    pub async fn clear_profile(&self) -> Result<(), AppError> {
        {
            let mut slot = self.inner.profile.write().await;
            *slot = None;
        }
        self.persist_profile().await
    }

    // ─── Persistence ─────────────────────────────────────────────

    async fn persist_catches(&self) -> Result<(), AppError> {
        let snapshot = self.inner.catches.read().await.clone();
        self.write_namespace(namespaces::CATCHES, &snapshot).await
    }

    async fn persist_profile(&self) -> Result<(), AppError> {
        let snapshot = self.inner.profile.read().await.clone();
        self.write_namespace(namespaces::PROFILE, &snapshot).await
    }

    async fn write_namespace<T: serde::Serialize>(
        &self,
        namespace: &str,
        value: &T,
    ) -> Result<(), AppError> {
        let Some(root) = &self.inner.root else {
            return Ok(()); // in-memory mode
        };

        let json = serde_json::to_string_pretty(value)
            .map_err(|e| AppError::Storage(format!("Failed to serialize {}: {}", namespace, e)))?;

        tokio::fs::write(namespace_path(root, namespace), json)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write {}: {}", namespace, e)))
    }
}

fn namespace_path(root: &Path, namespace: &str) -> PathBuf {
    root.join(format!("{}.json", namespace))
}

/// Load a namespace file, returning `None` when it does not exist yet.
async fn load_namespace<T: serde::de::DeserializeOwned>(
    root: &Path,
    namespace: &str,
) -> Result<Option<T>, AppError> {
    let path = namespace_path(root, namespace);
    match tokio::fs::read_to_string(&path).await {
        Ok(json) => serde_json::from_str(&json).map(Some).map_err(|e| {
            AppError::Storage(format!("Corrupt store file {}: {}", path.display(), e))
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AppError::Storage(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

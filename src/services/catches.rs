// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Catch construction and store lifecycle.
//!
//! A catch is born in the temporary in-memory store when an
//! identification completes, and only moves to the persisted collection
//! when the user decides to keep it. Discarding a temp catch or deleting
//! a saved one are the only destructor paths.

use crate::db::LocalDb;
use crate::error::AppError;
use crate::ids::generate_unique_id;
use crate::models::{CatchLocation, CatchRecord, CatchUpdate, Identification};
use crate::time_utils::now_rfc3339;
use dashmap::DashMap;
use std::sync::Arc;

/// Service owning the temporary catch store and the persisted collection.
#[derive(Clone)]
pub struct CatchService {
    db: LocalDb,
    /// Catches awaiting a save/discard decision. Memory only: these do
    /// not survive a restart.
    temp: Arc<DashMap<String, CatchRecord>>,
}

impl CatchService {
    pub fn new(db: LocalDb) -> Self {
        Self {
            db,
            temp: Arc::new(DashMap::new()),
        }
    }

    // ─── Temporary Store ─────────────────────────────────────────

    /// Build a catch record from an identification and stage it in the
    /// temporary store.
    ///
    /// Pure construction aside from the staging insert: fresh unique id,
    /// `date` set to now, notes composed from the identification, and a
    /// location of all-`None` when the capture carried no position.
    pub fn create_temp_catch(
        &self,
        identification: &Identification,
        image_uri: &str,
        location: Option<CatchLocation>,
    ) -> CatchRecord {
        let record = CatchRecord {
            id: generate_unique_id(),
            fish_id: None,
            fish_name: Some(identification.name.clone()),
            location: location.unwrap_or_else(CatchLocation::unknown),
            date: now_rfc3339(),
            image_uri: image_uri.to_string(),
            notes: compose_notes(identification),
            confidence: Some(identification.confidence),
            improvement_tips: Some(identification.improvement_tips.clone()),
        };

        tracing::debug!(catch_id = %record.id, fish = ?record.fish_name, "Staged temp catch");
        self.temp.insert(record.id.clone(), record.clone());
        record
    }

    /// Look up a catch awaiting a save decision.
    pub fn get_temp_catch(&self, id: &str) -> Option<CatchRecord> {
        self.temp.get(id).map(|entry| entry.value().clone())
    }

    /// Drop a staged catch without saving. Returns whether one existed.
    pub fn discard_temp_catch(&self, id: &str) -> bool {
        self.temp.remove(id).is_some()
    }

    /// Promote a staged catch into the persisted collection.
    pub async fn save_catch(&self, id: &str) -> Result<CatchRecord, AppError> {
        let (_, record) = self
            .temp
            .remove(id)
            .ok_or_else(|| AppError::NotFound(format!("Temp catch {} not found", id)))?;

        self.db.insert_catch(record.clone()).await?;
        tracing::info!(catch_id = %record.id, fish = ?record.fish_name, "Catch saved");
        Ok(record)
    }

    // ─── Persisted Collection ────────────────────────────────────

    /// All saved catches, newest first.
    pub async fn list_catches(&self) -> Vec<CatchRecord> {
        self.db.list_catches().await
    }

    /// A saved catch by id.
    pub async fn get_catch(&self, id: &str) -> Result<CatchRecord, AppError> {
        self.db
            .get_catch(id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Catch {} not found", id)))
    }

    /// Partially update a saved catch.
    pub async fn update_catch(
        &self,
        id: &str,
        update: CatchUpdate,
    ) -> Result<CatchRecord, AppError> {
        self.db
            .update_catch(id, update)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Catch {} not found", id)))
    }

    /// Delete a saved catch.
    pub async fn delete_catch(&self, id: &str) -> Result<(), AppError> {
        if !self.db.delete_catch(id).await? {
            return Err(AppError::NotFound(format!("Catch {} not found", id)));
        }
        tracing::info!(catch_id = id, "Catch deleted");
        Ok(())
    }
}

/// Compose catch notes from an identification: description, habitat, and
/// scientific name in that order, separated by blank lines.
fn compose_notes(identification: &Identification) -> String {
    format!(
        "{}\n\nHabitat: {}\n\nScientific Name: {}",
        identification.description, identification.habitat, identification.scientific_name
    )
}

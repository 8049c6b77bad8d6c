// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Catch record model for storage and API.

use serde::{Deserialize, Serialize};

/// Where a catch happened. All fields are optional: without location
/// permission the app simply omits the tag and the catch is still valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatchLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub name: Option<String>,
}

impl CatchLocation {
    /// The placeholder used when no location was captured.
    pub fn unknown() -> Self {
        Self::default()
    }
}

/// A logged fish catch.
///
/// Lives in the temporary in-memory store until the user decides to keep
/// it, then moves to the persisted collection. The id is assigned at
/// creation and never changes; deletion is the only destructor path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatchRecord {
    pub id: String,
    /// Reference into a species catalogue, when known
    pub fish_id: Option<String>,
    /// AI-identified species name
    pub fish_name: Option<String>,
    pub location: CatchLocation,
    /// Creation time (RFC3339)
    pub date: String,
    /// Opaque reference to the captured image
    pub image_uri: String,
    /// Free text composed from the identification result
    pub notes: String,
    /// Model-reported certainty (0-100) for the species guess
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    /// Photo-quality tips carried over from a low-confidence identification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement_tips: Option<Vec<String>>,
}

/// Partial update applied to a saved catch. Absent fields are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatchUpdate {
    pub fish_name: Option<String>,
    pub notes: Option<String>,
    pub location: Option<CatchLocation>,
}

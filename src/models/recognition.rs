// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fish identification result models.

use serde::{Deserialize, Serialize};

/// How an identification was recovered from the model's completion text.
///
/// Callers can use this to discount `Extracted` results, which were
/// salvaged from malformed output rather than parsed from valid JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionSource {
    Parsed,
    Extracted,
}

/// A normalized species identification.
///
/// Always fully populated: fields the upstream service omitted carry
/// documented fallback values instead of being absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identification {
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub habitat: String,
    /// Clamped to [0, 100]
    pub confidence: u8,
    pub improvement_tips: Vec<String>,
    pub source: CompletionSource,
}

/// Minimal identification used for live frame sampling.
///
/// Best-effort by contract: failures surface as placeholder names with
/// confidence 0, never as errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickIdentification {
    pub name: String,
    pub confidence: u8,
}

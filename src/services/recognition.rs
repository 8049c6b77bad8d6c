// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! AI recognition client for fish identification.
//!
//! Handles:
//! - Full identification of a captured photo
//! - Quick identification for live frame sampling
//! - Normalizing the model's completion text into a result the caller
//!   can always use, salvaging fields by regex when the output is not
//!   valid JSON
//!
//! A capture session drives exactly one full identification at a time
//! (Idle -> Capturing -> AwaitingResult -> Identified/Failed -> Idle);
//! Failed is only reachable through network/service errors here. Model
//! output that merely fails to parse still yields an identification.

use crate::error::AppError;
use crate::models::{CompletionSource, Identification, QuickIdentification};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;

const IDENTIFY_SYSTEM_PROMPT: &str = "You are an expert ichthyologist specializing in fish \
    identification. Analyze the ENTIRE provided fish image carefully and return a JSON object \
    with the following fields: name (common name of the fish), scientificName, description \
    (brief description of the fish), habitat (where this fish typically lives), confidence \
    (a number between 0-100), improvementTips (an array of photo-quality tips). Examine the \
    full image thoroughly - look at all parts of the photo for fish presence, not just the \
    center.";

const IDENTIFY_USER_PROMPT: &str = "Identify the fish species from this complete image. \
    Please examine the entire photo carefully for any fish present:";

const QUICK_SYSTEM_PROMPT: &str = "You are an expert in fish identification. Analyze the \
    provided video frame and return a JSON object with only two fields: name (common name of \
    the fish) and confidence (a number between 0-100). Be very concise and respond quickly as \
    this is for real-time video analysis. Examine the entire frame for fish presence.";

const QUICK_USER_PROMPT: &str = "Quick identification of fish in this video frame:";

/// Fallbacks substituted for fields the model omitted.
const FALLBACK_NAME: &str = "Unknown Fish";
const FALLBACK_SCIENTIFIC_NAME: &str = "Unknown";
const FALLBACK_DESCRIPTION: &str = "No description available";
const FALLBACK_HABITAT: &str = "Unknown habitat";
const FALLBACK_CONFIDENCE: u8 = 50;

/// Placeholder returned when a live frame could not be analyzed at all.
pub const QUICK_ERROR_NAME: &str = "Error analyzing";
/// Placeholder returned while a live frame's completion was unreadable.
pub const QUICK_PENDING_NAME: &str = "Analyzing...";

/// Matches `"key": "value"` pairs that survive inside malformed JSON.
static FIELD_PAIR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(?P<key>[A-Za-z][A-Za-z0-9_]*)"\s*:\s*"(?P<value>[^"]*)""#).unwrap()
});

/// Client for the vision-language recognition endpoint.
#[derive(Clone)]
pub struct RecognitionClient {
    http: reqwest::Client,
    endpoint_url: String,
}

impl RecognitionClient {
    /// Create a client against the given endpoint URL.
    pub fn new(endpoint_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint_url,
        }
    }

    /// Identify the fish in a base64-encoded photo.
    ///
    /// Fails only on network/service errors. Whatever text the model
    /// returns is normalized into an [`Identification`]; see
    /// [`normalize_completion`] for the fallback rules.
    pub async fn identify(&self, image_base64: &str) -> Result<Identification, AppError> {
        let completion = self
            .complete(IDENTIFY_SYSTEM_PROMPT, IDENTIFY_USER_PROMPT, image_base64)
            .await?;

        let identification = normalize_completion(&completion);
        tracing::info!(
            name = %identification.name,
            confidence = identification.confidence,
            source = ?identification.source,
            "Fish identified"
        );
        Ok(identification)
    }

    /// Best-effort identification of a live video frame.
    ///
    /// Never fails: service errors become `"Error analyzing"` and
    /// unreadable completions become `"Analyzing..."`, both with
    /// confidence 0, so the sampling loop is never interrupted.
    pub async fn quick_identify(&self, image_base64: &str) -> QuickIdentification {
        match self
            .complete(QUICK_SYSTEM_PROMPT, QUICK_USER_PROMPT, image_base64)
            .await
        {
            Ok(completion) => normalize_quick_completion(&completion),
            Err(e) => {
                tracing::debug!(error = %e, "Frame analysis failed");
                QuickIdentification {
                    name: QUICK_ERROR_NAME.to_string(),
                    confidence: 0,
                }
            }
        }
    }

    /// Issue one chat-completion request carrying an inlined image.
    async fn complete(
        &self,
        system: &str,
        user_text: &str,
        image_base64: &str,
    ) -> Result<String, AppError> {
        let body = serde_json::json!({
            "messages": [
                { "role": "system", "content": system },
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": user_text },
                        { "type": "image", "image": image_base64 },
                    ],
                },
            ],
        });

        let response = self
            .http
            .post(&self.endpoint_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Recognition(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Recognition(format!("HTTP {}: {}", status, body)));
        }

        let envelope: CompletionEnvelope = response
            .json()
            .await
            .map_err(|e| AppError::Recognition(format!("Invalid response body: {}", e)))?;

        Ok(envelope.completion)
    }
}

/// Response body of the recognition endpoint.
#[derive(Debug, Deserialize)]
struct CompletionEnvelope {
    completion: String,
}

/// The identification schema the prompt asks for (camelCase on the wire).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawIdentification {
    name: Option<String>,
    scientific_name: Option<String>,
    description: Option<String>,
    habitat: Option<String>,
    confidence: Option<f64>,
    improvement_tips: Option<Vec<String>>,
}

/// The quick-identification schema for frame sampling.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawQuickIdentification {
    name: Option<String>,
    confidence: Option<f64>,
}

/// Normalize a completion into an identification, never failing.
///
/// Valid JSON takes the strict path with per-field fallbacks
/// (`source = Parsed`). Anything else goes through regex field
/// extraction with the same fallbacks (`source = Extracted`).
pub fn normalize_completion(completion: &str) -> Identification {
    match serde_json::from_str::<RawIdentification>(completion) {
        Ok(raw) => Identification {
            name: raw.name.unwrap_or_else(|| FALLBACK_NAME.to_string()),
            scientific_name: raw
                .scientific_name
                .unwrap_or_else(|| FALLBACK_SCIENTIFIC_NAME.to_string()),
            description: raw
                .description
                .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
            habitat: raw.habitat.unwrap_or_else(|| FALLBACK_HABITAT.to_string()),
            confidence: clamp_confidence(raw.confidence),
            improvement_tips: raw.improvement_tips.unwrap_or_default(),
            source: CompletionSource::Parsed,
        },
        Err(e) => {
            tracing::debug!(error = %e, "Completion is not valid JSON, extracting fields");
            let fields = extract_fields(completion);
            let field = |key: &str| fields.get(key).cloned();

            Identification {
                name: field("name").unwrap_or_else(|| FALLBACK_NAME.to_string()),
                scientific_name: field("scientificname")
                    .unwrap_or_else(|| FALLBACK_SCIENTIFIC_NAME.to_string()),
                description: field("description")
                    .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
                habitat: field("habitat").unwrap_or_else(|| FALLBACK_HABITAT.to_string()),
                confidence: field("confidence")
                    .and_then(|v| v.parse::<f64>().ok())
                    .map(|v| clamp_confidence(Some(v)))
                    .unwrap_or(FALLBACK_CONFIDENCE),
                improvement_tips: Vec::new(),
                source: CompletionSource::Extracted,
            }
        }
    }
}

/// Normalize a quick-identification completion, never failing.
fn normalize_quick_completion(completion: &str) -> QuickIdentification {
    match serde_json::from_str::<RawQuickIdentification>(completion) {
        Ok(raw) => QuickIdentification {
            name: raw.name.unwrap_or_else(|| QUICK_PENDING_NAME.to_string()),
            confidence: raw.confidence.map(|c| clamp_confidence(Some(c))).unwrap_or(0),
        },
        Err(_) => QuickIdentification {
            name: QUICK_PENDING_NAME.to_string(),
            confidence: 0,
        },
    }
}

/// Pull `"key": "value"` pairs out of malformed completion text.
///
/// Keys are lowercased for case-insensitive lookup; the first occurrence
/// of a key wins.
fn extract_fields(text: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for captures in FIELD_PAIR_REGEX.captures_iter(text) {
        fields
            .entry(captures["key"].to_ascii_lowercase())
            .or_insert_with(|| captures["value"].to_string());
    }
    fields
}

fn clamp_confidence(raw: Option<f64>) -> u8 {
    match raw {
        Some(v) if v.is_finite() => v.round().clamp(0.0, 100.0) as u8,
        Some(_) => FALLBACK_CONFIDENCE,
        None => FALLBACK_CONFIDENCE,
    }
}

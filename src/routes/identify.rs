// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fish identification routes.
//!
//! `/api/identify` is the full capture flow: one request per capture
//! session, failing loudly on service errors so the app can offer a
//! retry. `/api/identify/frame` is the best-effort live sampling path
//! and never fails.

use crate::error::{AppError, Result};
use crate::models::{CatchLocation, CatchRecord, Identification};
use crate::services::FrameAnalysis;
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Identifications at or above this confidence drop their improvement
/// tips: the photo was good enough. Independent of the live-detection
/// thresholds by design.
const TIPS_CONFIDENCE_THRESHOLD: u8 = 70;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/identify", post(identify))
        .route("/api/identify/frame", post(analyze_frame))
        .route("/api/identify/frame/latest", get(latest_frame))
}

#[derive(Deserialize)]
struct IdentifyRequest {
    image_base64: String,
    /// Opaque reference to the captured image on the device
    image_uri: String,
    location: Option<CatchLocation>,
}

/// Identification plus the staged catch awaiting a save decision.
#[derive(Serialize)]
pub struct IdentifyResponse {
    pub identification: Identification,
    #[serde(rename = "catch")]
    pub catch_record: CatchRecord,
}

/// Identify the fish in a captured photo and stage a temp catch.
async fn identify(
    State(state): State<Arc<AppState>>,
    Json(request): Json<IdentifyRequest>,
) -> Result<Json<IdentifyResponse>> {
    let image = validated_image(&request.image_base64)?;
    if request.image_uri.is_empty() {
        return Err(AppError::BadRequest("image_uri is empty".to_string()));
    }

    let mut identification = state.recognition.identify(image).await?;

    let catch_record =
        state
            .catches
            .create_temp_catch(&identification, &request.image_uri, request.location);

    // High-confidence identifications don't need photo advice; the tips
    // stay on the record either way.
    if identification.confidence >= TIPS_CONFIDENCE_THRESHOLD {
        identification.improvement_tips.clear();
    }

    Ok(Json(IdentifyResponse {
        identification,
        catch_record,
    }))
}

#[derive(Deserialize)]
struct FrameRequest {
    image_base64: String,
}

/// Analyze one live video frame. Best-effort; never a 5xx.
async fn analyze_frame(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FrameRequest>,
) -> Result<Json<FrameAnalysis>> {
    let image = validated_image(&request.image_base64)?;
    Ok(Json(state.live.analyze_frame(image.to_string()).await))
}

#[derive(Serialize)]
pub struct LatestFrameResponse {
    pub analysis: Option<FrameAnalysis>,
}

/// The most recent completed frame analysis.
async fn latest_frame(State(state): State<Arc<AppState>>) -> Json<LatestFrameResponse> {
    Json(LatestFrameResponse {
        analysis: state.live.latest().await,
    })
}

/// Check the payload is non-empty base64, tolerating a data-URI prefix.
/// Returns the bare base64 slice to send upstream.
fn validated_image(payload: &str) -> Result<&str> {
    let bare = match payload.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => payload,
    };

    if bare.is_empty() {
        return Err(AppError::BadRequest("image_base64 is empty".to_string()));
    }

    BASE64
        .decode(bare)
        .map_err(|_| AppError::BadRequest("image_base64 is not valid base64".to_string()))?;

    Ok(bare)
}

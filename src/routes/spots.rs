// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fishing spot discovery routes.

use crate::error::{AppError, Result};
use crate::geo::Coordinate;
use crate::models::{RankedSpot, SpotType};
use crate::services::spots::DEFAULT_NEARBY_RADIUS_MILES;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const MAX_SEARCH_QUERY_LEN: usize = 100;
/// Largest meaningful radius: anything bigger covers the whole planet.
const MAX_RADIUS_MILES: f64 = 25_000.0;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/spots", get(get_all_spots))
        .route("/api/spots/nearby", get(get_nearby_spots))
        .route("/api/spots/search", get(search_spots))
        .route("/api/spots/types/{spot_type}", get(get_spots_by_type))
}

/// Spots response shared by every query mode.
#[derive(Serialize)]
pub struct SpotsResponse {
    pub spots: Vec<RankedSpot>,
    pub total: u32,
}

impl From<Vec<RankedSpot>> for SpotsResponse {
    fn from(spots: Vec<RankedSpot>) -> Self {
        Self {
            total: spots.len() as u32,
            spots,
        }
    }
}

#[derive(Deserialize)]
struct AllSpotsQuery {
    lat: Option<f64>,
    lon: Option<f64>,
}

/// All spots, ranked by distance when a location is supplied.
async fn get_all_spots(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AllSpotsQuery>,
) -> Result<Json<SpotsResponse>> {
    let location = match (params.lat, params.lon) {
        (Some(lat), Some(lon)) => Some(validated_coordinate(lat, lon)?),
        (None, None) => None,
        _ => {
            return Err(AppError::BadRequest(
                "Provide both 'lat' and 'lon', or neither".to_string(),
            ))
        }
    };

    Ok(Json(state.spots.all(location).into()))
}

#[derive(Deserialize)]
struct NearbyQuery {
    lat: f64,
    lon: f64,
    radius: Option<f64>,
}

/// Spots within a radius of the user, closest first.
async fn get_nearby_spots(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NearbyQuery>,
) -> Result<Json<SpotsResponse>> {
    let location = validated_coordinate(params.lat, params.lon)?;
    let radius = params.radius.unwrap_or(DEFAULT_NEARBY_RADIUS_MILES);
    if !(radius > 0.0 && radius <= MAX_RADIUS_MILES) {
        return Err(AppError::BadRequest(format!(
            "Radius must be in (0, {}] miles",
            MAX_RADIUS_MILES
        )));
    }

    tracing::debug!(
        lat = params.lat,
        lon = params.lon,
        radius,
        "Nearby spot query"
    );

    Ok(Json(state.spots.nearby(location, radius).into()))
}

#[derive(Deserialize)]
struct SearchQuery {
    q: String,
}

/// Search spots by name, county, or species.
async fn search_spots(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SpotsResponse>> {
    if params.q.is_empty() {
        return Err(AppError::BadRequest("Search query is empty".to_string()));
    }
    if params.q.len() > MAX_SEARCH_QUERY_LEN {
        return Err(AppError::BadRequest(format!(
            "Search query longer than {} characters",
            MAX_SEARCH_QUERY_LEN
        )));
    }

    Ok(Json(state.spots.search(&params.q).into()))
}

/// Spots of one water type.
async fn get_spots_by_type(
    State(state): State<Arc<AppState>>,
    Path(spot_type): Path<SpotType>,
) -> Result<Json<SpotsResponse>> {
    Ok(Json(state.spots.by_type(spot_type).into()))
}

fn validated_coordinate(lat: f64, lon: f64) -> Result<Coordinate> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(AppError::BadRequest(
            "Latitude must be between -90 and 90".to_string(),
        ));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(AppError::BadRequest(
            "Longitude must be between -180 and 180".to_string(),
        ));
    }
    Ok(Coordinate::new(lat, lon))
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fishing spot catalogue models.
//!
//! Spots are read-only reference data loaded once at startup. A spot's
//! distance from the user is never stored: queries attach it transiently
//! via [`RankedSpot`].

use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};

/// Kind of water a spot is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpotType {
    Lake,
    River,
    Stream,
    Pond,
    GreatLake,
}

/// How hard a species is to land at a given spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// How plentiful a species is at a given spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Abundance {
    Low,
    Medium,
    High,
}

/// A species found at a spot, with seasonal guidance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FishType {
    pub name: String,
    pub best_time: String,
    pub season: String,
    pub difficulty: Difficulty,
    pub abundance: Abundance,
}

/// Best fishing windows for a spot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestTimes {
    pub morning: String,
    pub evening: String,
    pub season: String,
}

/// Weather and water conditions that fish well.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conditions {
    pub best_weather: String,
    pub pressure: String,
    pub temperature: String,
    pub wind: String,
}

/// A named, geolocated fishing location with species and visit metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FishingSpot {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub spot_type: SpotType,
    pub fish_types: Vec<FishType>,
    pub description: String,
    pub coordinates: Coordinate,
    pub best_times: BestTimes,
    pub conditions: Conditions,
    pub tips: Vec<String>,
    pub bait_recommendations: Vec<String>,
    pub depth: String,
    pub access: String,
    pub facilities: Vec<String>,
    pub county: String,
    pub size: String,
    pub regulations: Vec<String>,
}

/// A spot paired with its distance from a query location.
///
/// `distance` is in miles, rounded to one decimal place, and is 0 when the
/// query carried no location (0 is a placeholder there, not a real value).
#[derive(Debug, Clone, Serialize)]
pub struct RankedSpot {
    #[serde(flatten)]
    pub spot: FishingSpot,
    pub distance: f64,
}

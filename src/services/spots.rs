// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spot catalogue loading and query service.

use crate::geo::{haversine_miles, round_to_tenth, Coordinate};
use crate::models::{FishingSpot, RankedSpot, SpotType};
use std::fs;
use std::path::Path;

/// Default search radius for nearby queries, in miles.
pub const DEFAULT_NEARBY_RADIUS_MILES: f64 = 50.0;

/// Service holding the read-only spot catalogue and serving queries.
#[derive(Default, Clone)]
pub struct SpotService {
    spots: Vec<FishingSpot>,
}

impl SpotService {
    /// Load the catalogue from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SpotError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| SpotError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load the catalogue from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, SpotError> {
        let spots: Vec<FishingSpot> =
            serde_json::from_str(json_data).map_err(|e| SpotError::ParseError(e.to_string()))?;

        tracing::info!(count = spots.len(), "Loaded fishing spots");
        Ok(Self { spots })
    }

    /// Build a service from already-parsed spots (tests).
    pub fn from_spots(spots: Vec<FishingSpot>) -> Self {
        Self { spots }
    }

    /// The full catalogue in declaration order.
    pub fn spots(&self) -> &[FishingSpot] {
        &self.spots
    }

    /// Spots within `radius_miles` of `location`, closest first.
    ///
    /// Distances are rounded to one decimal place before filtering and
    /// sorting. Ties keep catalogue order (stable sort). Never fails; an
    /// empty catalogue or a remote location just yields an empty list.
    pub fn nearby(&self, location: Coordinate, radius_miles: f64) -> Vec<RankedSpot> {
        let mut ranked: Vec<RankedSpot> = self
            .spots
            .iter()
            .map(|spot| RankedSpot {
                distance: round_to_tenth(haversine_miles(location, spot.coordinates)),
                spot: spot.clone(),
            })
            .filter(|r| r.distance <= radius_miles)
            .collect();

        ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        ranked
    }

    /// Every spot, with distances when a location is given.
    ///
    /// Without a location, distance is 0 (a placeholder, not a real
    /// value) and catalogue order is preserved.
    pub fn all(&self, location: Option<Coordinate>) -> Vec<RankedSpot> {
        match location {
            Some(location) => {
                let mut ranked: Vec<RankedSpot> = self
                    .spots
                    .iter()
                    .map(|spot| RankedSpot {
                        distance: round_to_tenth(haversine_miles(location, spot.coordinates)),
                        spot: spot.clone(),
                    })
                    .collect();
                ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
                ranked
            }
            None => self.unranked(self.spots.iter()),
        }
    }

    /// Spots of exactly the given type. Location is not considered.
    pub fn by_type(&self, spot_type: SpotType) -> Vec<RankedSpot> {
        self.unranked(self.spots.iter().filter(|s| s.spot_type == spot_type))
    }

    /// Case-insensitive substring search over spot name, county, and the
    /// species found at the spot. Location is not considered.
    pub fn search(&self, query: &str) -> Vec<RankedSpot> {
        let query = query.to_lowercase();
        self.unranked(self.spots.iter().filter(|spot| {
            spot.name.to_lowercase().contains(&query)
                || spot.county.to_lowercase().contains(&query)
                || spot
                    .fish_types
                    .iter()
                    .any(|fish| fish.name.to_lowercase().contains(&query))
        }))
    }

    fn unranked<'a>(&self, spots: impl Iterator<Item = &'a FishingSpot>) -> Vec<RankedSpot> {
        spots
            .map(|spot| RankedSpot {
                spot: spot.clone(),
                distance: 0.0,
            })
            .collect()
    }
}

/// Errors from catalogue loading.
#[derive(Debug, thiserror::Error)]
pub enum SpotError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse spot catalogue: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::spot::{Abundance, BestTimes, Conditions, Difficulty, FishType};

    fn spot(id: &str, name: &str, lat: f64, lon: f64) -> FishingSpot {
        FishingSpot {
            id: id.to_string(),
            name: name.to_string(),
            spot_type: SpotType::Lake,
            fish_types: vec![FishType {
                name: "Walleye".to_string(),
                best_time: "5:30-8:30 AM".to_string(),
                season: "Year-round".to_string(),
                difficulty: Difficulty::Medium,
                abundance: Abundance::High,
            }],
            description: String::new(),
            coordinates: Coordinate::new(lat, lon),
            best_times: BestTimes {
                morning: String::new(),
                evening: String::new(),
                season: String::new(),
            },
            conditions: Conditions {
                best_weather: String::new(),
                pressure: String::new(),
                temperature: String::new(),
                wind: String::new(),
            },
            tips: vec![],
            bait_recommendations: vec![],
            depth: String::new(),
            access: String::new(),
            facilities: vec![],
            county: "Roscommon".to_string(),
            size: String::new(),
            regulations: vec![],
        }
    }

    #[test]
    fn test_nearby_filters_and_sorts() {
        let service = SpotService::from_spots(vec![
            spot("far", "Far Lake", 48.0, -90.0),
            spot("near", "Near Lake", 44.01, -84.0),
            spot("here", "Here Lake", 44.0, -84.0),
        ]);

        let results = service.nearby(Coordinate::new(44.0, -84.0), 50.0);
        let ids: Vec<&str> = results.iter().map(|r| r.spot.id.as_str()).collect();
        assert_eq!(ids, vec!["here", "near"]);
        assert!(results.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_nearby_equal_distances_keep_catalogue_order() {
        // Two spots equidistant from the query point (symmetric east/west).
        let service = SpotService::from_spots(vec![
            spot("east", "East Lake", 44.0, -83.9),
            spot("west", "West Lake", 44.0, -84.1),
        ]);

        let results = service.nearby(Coordinate::new(44.0, -84.0), 50.0);
        assert_eq!(results[0].distance, results[1].distance);
        assert_eq!(results[0].spot.id, "east");
        assert_eq!(results[1].spot.id, "west");
    }

    #[test]
    fn test_all_without_location_preserves_order_with_zero_distance() {
        let service = SpotService::from_spots(vec![
            spot("b", "B Lake", 48.0, -90.0),
            spot("a", "A Lake", 44.0, -84.0),
        ]);

        let results = service.all(None);
        let ids: Vec<&str> = results.iter().map(|r| r.spot.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert!(results.iter().all(|r| r.distance == 0.0));
    }

    #[test]
    fn test_all_with_location_sorts() {
        let service = SpotService::from_spots(vec![
            spot("far", "Far Lake", 48.0, -90.0),
            spot("near", "Near Lake", 44.0, -84.0),
        ]);

        let results = service.all(Some(Coordinate::new(44.0, -84.0)));
        assert_eq!(results[0].spot.id, "near");
        assert_eq!(results[1].spot.id, "far");
    }

    #[test]
    fn test_search_matches_species_case_insensitively() {
        let service = SpotService::from_spots(vec![spot("a", "A Lake", 44.0, -84.0)]);

        assert_eq!(service.search("walleye").len(), 1);
        assert_eq!(service.search("WALLEYE").len(), 1);
        assert_eq!(service.search("muskie").len(), 0);
    }

    #[test]
    fn test_search_matches_county() {
        let service = SpotService::from_spots(vec![spot("a", "A Lake", 44.0, -84.0)]);
        assert_eq!(service.search("roscommon").len(), 1);
    }

    #[test]
    fn test_by_type_ignores_location() {
        let mut river = spot("r", "Some River", 44.0, -84.0);
        river.spot_type = SpotType::River;
        let service = SpotService::from_spots(vec![spot("l", "Some Lake", 44.0, -84.0), river]);

        let results = service.by_type(SpotType::River);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].spot.id, "r");
        assert_eq!(results[0].distance, 0.0);
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Great-circle distance between coordinates.

use serde::{Deserialize, Serialize};

/// Earth radius in miles, matching the catalogue's distance convention.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Haversine distance in miles between two coordinates.
///
/// Pure and deterministic. NaN inputs propagate NaN; validating
/// coordinates is the caller's job.
pub fn haversine_miles(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Round a distance to one decimal place for display and filtering.
pub fn round_to_tenth(distance: f64) -> f64 {
    (distance * 10.0).round() / 10.0
}

//! Query point with coordinate validation.

use serde::{Deserialize, Serialize};

use crate::error::PlaceError;

/// Geographic point (lat/long, degrees).
///
/// Created per query and never persisted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub long: f64,
}

impl Point {
    /// Create a point, enforcing `-90 <= lat <= 90` and
    /// `-180 <= long <= 180`. NaN fails both bounds.
    pub fn new(lat: f64, long: f64) -> Result<Self, PlaceError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(PlaceError::InvalidCoordinate {
                name: "lat",
                value: lat.to_string(),
            });
        }
        if !(-180.0..=180.0).contains(&long) {
            return Err(PlaceError::InvalidCoordinate {
                name: "long",
                value: long.to_string(),
            });
        }
        Ok(Self { lat, long })
    }

    /// Parse a point from string coordinates, as received from callers that
    /// pass them through unparsed.
    pub fn parse(lat: &str, long: &str) -> Result<Self, PlaceError> {
        let lat_num = parse_coordinate("lat", lat)?;
        let long_num = parse_coordinate("long", long)?;
        Self::new(lat_num, long_num)
    }
}

fn parse_coordinate(name: &'static str, raw: &str) -> Result<f64, PlaceError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| PlaceError::InvalidCoordinate {
            name,
            value: raw.to_string(),
        })
}

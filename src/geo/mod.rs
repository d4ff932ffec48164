//! Geographic primitives: coordinate validity, point-in-polygon containment,
//! and parsing of caller-supplied coordinates.

mod coordinates;
mod polygon;

pub use coordinates::*;
pub use polygon::*;

use serde::Serialize;

/// A validated latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    #[serde(rename = "latitude")]
    pub lat: f64,
    #[serde(rename = "longitude")]
    pub lon: f64,
}

/// True if `lat` is finite and within [-90, 90].
pub fn is_valid_latitude(lat: f64) -> bool {
    lat.is_finite() && (-90.0..=90.0).contains(&lat)
}

/// True if `lon` is finite and within [-180, 180].
pub fn is_valid_longitude(lon: f64) -> bool {
    lon.is_finite() && (-180.0..=180.0).contains(&lon)
}

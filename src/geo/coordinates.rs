//! Parsing and service-area checks for caller-supplied coordinates.

use super::{is_valid_latitude, is_valid_longitude, Coordinate};

use regex::Regex;
use std::sync::OnceLock;

/// An inclusive latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// True if the point lies inside the box or on its boundary.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}

/// Approximate extent of British Columbia, the BC Hydro service area.
pub const BC_SERVICE_AREA: BoundingBox = BoundingBox {
    min_lat: 48.3,
    max_lat: 60.0,
    min_lon: -139.0,
    max_lon: -114.0,
};

/// Parse query-string coordinates.
///
/// Missing, empty, non-numeric or out-of-range values yield `None`; there are
/// no partial results.
pub fn parse_coordinates(lat: Option<&str>, lon: Option<&str>) -> Option<Coordinate> {
    let lat = parse_degrees(lat?)?;
    let lon = parse_degrees(lon?)?;

    if !is_valid_latitude(lat) || !is_valid_longitude(lon) {
        return None;
    }

    Some(Coordinate { lat, lon })
}

/// Read the longest leading decimal number, ignoring leading whitespace and
/// any trailing text ("49.2827abc" reads as 49.2827).
fn parse_degrees(s: &str) -> Option<f64> {
    static DECIMAL_PREFIX: OnceLock<Regex> = OnceLock::new();
    let re = DECIMAL_PREFIX
        .get_or_init(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap());

    let m = re.find(s.trim_start())?;
    m.as_str().parse().ok()
}

/// True if the point is a valid coordinate inside [`BC_SERVICE_AREA`].
pub fn is_in_bc_area(lat: f64, lon: f64) -> bool {
    is_valid_latitude(lat) && is_valid_longitude(lon) && BC_SERVICE_AREA.contains(lat, lon)
}

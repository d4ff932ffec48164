//! Point-in-polygon containment using ray casting.
//!
//! Polygons are flat `[lon, lat, lon, lat, ...]` sequences, the layout the
//! outage feed uses. The test runs on a planar (equirectangular) projection,
//! which is close enough at regional scale but not geodesically exact.

use serde_json::Value;

/// Minimum number of flat coordinates in a polygon (three vertices).
pub const MIN_POLYGON_COORDS: usize = 6;

/// Structural check of a flat polygon: even length, at least three vertices,
/// every coordinate finite. Winding order and self-intersection are not checked.
pub fn is_valid_polygon(coords: &[f64]) -> bool {
    coords.len() % 2 == 0
        && coords.len() >= MIN_POLYGON_COORDS
        && coords.iter().all(|c| c.is_finite())
}

/// Extract a flat coordinate list from a raw JSON polygon.
///
/// Returns `None` if the value is not an array or holds anything other than
/// numbers. Length and finiteness are left to [`is_valid_polygon`].
pub fn polygon_coords(value: &Value) -> Option<Vec<f64>> {
    value.as_array()?.iter().map(Value::as_f64).collect()
}

/// Test whether the point (`lat`, `lon`) falls inside `polygon`.
///
/// Returns false for non-finite points and for polygons that fail
/// [`is_valid_polygon`]. Points exactly on an edge or vertex get whatever the
/// parity count yields.
pub fn is_point_in_polygon(lat: f64, lon: f64, polygon: &[f64]) -> bool {
    if !lat.is_finite() || !lon.is_finite() || !is_valid_polygon(polygon) {
        return false;
    }

    let vertices: Vec<(f64, f64)> = polygon.chunks_exact(2).map(|p| (p[0], p[1])).collect();

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (xi, yi) = vertices[i];
        let (xj, yj) = vertices[j];

        // yi != yj whenever the first clause holds, so the division is safe.
        let crosses = (yi > lat) != (yj > lat) && lon < (xj - xi) * (lat - yi) / (yj - yi) + xi;
        if crosses {
            inside = !inside;
        }
        j = i;
    }

    inside
}

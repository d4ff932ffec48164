//! Filtering of the full outage set down to what affects one caller.

use super::{Outage, OutageSummary};
use crate::geo::Coordinate;

use serde::Serialize;

/// Payload returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutageResponse {
    pub cached: bool,
    pub coordinates: Coordinate,
    pub total_outages: usize,
    pub affecting_you: usize,
    pub outages: Vec<OutageSummary>,
}

/// Build the response for `point` from the full outage set.
///
/// Keeps only outages whose polygon contains `point` and projects them to
/// their public fields. Pure: the same inputs always give the same output.
pub fn build_response(cached: bool, point: Coordinate, all_outages: &[Outage]) -> OutageResponse {
    let outages: Vec<OutageSummary> = all_outages
        .iter()
        .filter(|outage| outage.affects(point))
        .map(OutageSummary::from)
        .collect();

    OutageResponse {
        cached,
        coordinates: point,
        total_outages: all_outages.len(),
        affecting_you: outages.len(),
        outages,
    }
}

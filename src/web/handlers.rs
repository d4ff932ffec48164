//! HTTP request handlers.

use super::{ApiError, AppState};
use crate::feed::{load_outages, OutageFeed};
use crate::geo::{is_in_bc_area, parse_coordinates};
use crate::outage::{
    build_response, test_mode_status, test_outages, OutageResponse, VANCOUVER_DOWNTOWN,
};

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct OutageQuery {
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lon: Option<String>,
    #[serde(default)]
    pub test: Option<String>,
}

/// Outages affecting the caller's coordinates.
///
/// Test mode is resolved first and, when active, bypasses coordinate
/// validation and the upstream feed entirely.
pub async fn handle_outages<F: OutageFeed + 'static>(
    State(state): State<AppState<F>>,
    Query(query): Query<OutageQuery>,
) -> Result<Response, ApiError> {
    if let Some(param) = query.test.as_deref().filter(|p| !p.is_empty()) {
        let status = test_mode_status(state.config.test_mode, param);
        if status.enabled && !status.valid {
            return Err(ApiError::InvalidTestMode);
        }

        if let Some(scenario) = status.mode {
            tracing::info!("Test mode enabled: {}", scenario.as_str());
            let outages = test_outages(scenario);
            let body = build_response(false, VANCOUVER_DOWNTOWN, &outages);

            return pretty_json(&body, "no-cache".to_string());
        }
    }

    let point = parse_coordinates(query.lat.as_deref(), query.lon.as_deref())
        .ok_or(ApiError::InvalidCoordinates)?;

    if !is_in_bc_area(point.lat, point.lon) {
        return Err(ApiError::OutsideServiceArea);
    }

    let ttl = state.config.cache_ttl();
    let set = load_outages(state.cache.as_ref(), state.feed.as_ref(), ttl).await?;
    let body = build_response(set.cache_hit, point, &set.outages);

    tracing::debug!(
        "{} of {} outages affect ({}, {})",
        body.affecting_you,
        body.total_outages,
        point.lat,
        point.lon
    );

    let cache_control = format!("public, max-age={}", state.config.client_max_age());
    pretty_json(&body, cache_control)
}

/// Render `body` as indented JSON with the given `Cache-Control`.
fn pretty_json(body: &OutageResponse, cache_control: String) -> Result<Response, ApiError> {
    let json = serde_json::to_string_pretty(body)?;

    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (header::CACHE_CONTROL, cache_control),
    ];
    Ok((headers, json).into_response())
}

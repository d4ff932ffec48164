//! Request-boundary errors, rendered as JSON.

use crate::feed::FetchError;
use crate::outage::OutageSummary;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Everything that can fail a request.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing or invalid coordinates. Provide ?lat=XX.XXXX&lon=YY.YYYY query parameters")]
    InvalidCoordinates,
    #[error("Coordinates outside BC Hydro service area (British Columbia, Canada)")]
    OutsideServiceArea,
    #[error("Invalid test mode. Valid options: outage, no-outage, multiple")]
    InvalidTestMode,
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Error body; `outages` is always present and empty so clients can iterate it blindly.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub outages: Vec<OutageSummary>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCoordinates | Self::OutsideServiceArea | Self::InvalidTestMode => {
                StatusCode::BAD_REQUEST
            }
            Self::Fetch(_) | Self::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
            outages: Vec::new(),
        };

        (status, Json(body)).into_response()
    }
}

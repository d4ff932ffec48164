//! HTTP client for the BC Hydro outage feed.

use super::FetchError;

use std::future::Future;

/// Default location of the public outage map data.
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://www.bchydro.com/power-outages/app/outages-map-data.json";

const USER_AGENT: &str = "BCHydroProxy/1.0";

/// Source of the raw outage feed body.
pub trait OutageFeed: Send + Sync {
    /// Fetch the current feed as an undecoded JSON string.
    fn fetch(&self) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Fetches the feed over HTTP with a single GET per call. No retries.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    url: String,
}

impl UpstreamClient {
    pub fn new(url: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl OutageFeed for UpstreamClient {
    async fn fetch(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Upstream(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

//! Configuration module for the outage proxy.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::feed::DEFAULT_UPSTREAM_URL;

use std::env;
use std::time::Duration;

/// Longest `max-age` handed to clients, whatever the server-side cache lifetime.
const CLIENT_MAX_AGE_CAP: u64 = 60;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port for the web server (default: 8080)
    pub http_port: u16,
    /// Lifetime of the cached outage feed in seconds (default: 300)
    pub cache_max_age: u64,
    /// Outage feed location
    pub upstream_url: String,
    /// Serve canned data for `?test=` requests (default: false)
    pub test_mode: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 8080,
            cache_max_age: 300,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            test_mode: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BCHYDRO_PROXY_HTTP_PORT`: HTTP port (default: 8080)
    /// - `BCHYDRO_PROXY_CACHE_MAX_AGE`: feed cache lifetime in seconds (default: 300)
    /// - `BCHYDRO_PROXY_UPSTREAM_URL`: outage feed URL
    /// - `BCHYDRO_PROXY_TEST_MODE`: `true` to enable test mode
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(port) = lookup("BCHYDRO_PROXY_HTTP_PORT").and_then(|s| s.parse().ok()) {
            cfg.http_port = port;
        }

        if let Some(max_age) = lookup("BCHYDRO_PROXY_CACHE_MAX_AGE").and_then(|s| s.parse().ok()) {
            cfg.cache_max_age = max_age;
        }

        if let Some(url) = lookup("BCHYDRO_PROXY_UPSTREAM_URL") {
            cfg.upstream_url = url;
        }

        if let Some(flag) = lookup("BCHYDRO_PROXY_TEST_MODE") {
            cfg.test_mode = flag == "true";
        }

        cfg
    }

    /// Server-side lifetime of the cached feed.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_max_age)
    }

    /// `max-age` for the client `Cache-Control` header.
    pub fn client_max_age(&self) -> u64 {
        self.cache_max_age.min(CLIENT_MAX_AGE_CAP)
    }
}

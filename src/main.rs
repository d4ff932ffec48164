//! BC Hydro outage proxy.
//!
//! Fetches the public BC Hydro outage feed, caches it briefly, and answers
//! with only the outages whose area contains the caller's coordinates.

mod config;
mod feed;
mod geo;
mod outage;
mod web;

use config::ServerConfig;
use feed::{MemoryCache, UpstreamClient};
use web::Server;

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("bchydro_proxy=info".parse()?))
        .init();

    // Load configuration
    let cfg = ServerConfig::load();
    tracing::info!("Starting BC Hydro outage proxy on port {}...", cfg.http_port);

    let feed = Arc::new(UpstreamClient::new(&cfg.upstream_url)?);
    let cache = Arc::new(MemoryCache::new());
    tracing::info!("Upstream feed: {}", feed.url());
    tracing::info!("Feed cache max-age: {}s", cfg.cache_max_age);
    if cfg.test_mode {
        tracing::warn!("Test mode enabled: ?test= requests are answered with canned data");
    }

    // Start web server
    let server = Server::new(cfg, cache, feed);
    server.start().await?;

    Ok(())
}

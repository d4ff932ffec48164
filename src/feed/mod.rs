//! Retrieval of the outage dataset, cache first.

mod cache;
#[cfg(test)]
mod stub;
mod upstream;

pub use cache::*;
#[cfg(test)]
pub use stub::StubFeed;
pub use upstream::*;

use crate::outage::{parse_outages, Outage};

use std::time::Duration;
use thiserror::Error;

/// Single cache slot shared by every caller, whatever their coordinates.
pub const OUTAGES_CACHE_KEY: &str = "https://cache.bchydro-proxy.internal/outages";

/// Errors obtaining the outage dataset.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("BC Hydro API returned {0}")]
    Upstream(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed outage data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The full outage set plus where it came from.
#[derive(Debug, Clone)]
pub struct OutageSet {
    pub outages: Vec<Outage>,
    pub cache_hit: bool,
}

/// Load the outage set, preferring the cached copy.
///
/// On a miss the feed is fetched once and its raw body cached for `max_age`.
/// Upstream failures propagate; nothing stale is served and nothing is retried.
/// A body that fails to parse is not cached.
pub async fn load_outages<C, F>(
    cache: &C,
    feed: &F,
    max_age: Duration,
) -> Result<OutageSet, FetchError>
where
    C: CacheStore + ?Sized,
    F: OutageFeed,
{
    if let Some(body) = cache.get(OUTAGES_CACHE_KEY) {
        tracing::info!("Cache hit - using cached outage data");
        return Ok(OutageSet {
            outages: parse_outages(&body)?,
            cache_hit: true,
        });
    }

    tracing::info!("Cache miss - fetching outage feed from upstream");
    let body = feed.fetch().await.inspect_err(|e| {
        tracing::warn!("Upstream outage fetch failed: {}", e);
    })?;

    let outages = parse_outages(&body)?;
    tracing::debug!("Fetched {} outages, caching for {:?}", outages.len(), max_age);
    cache.put(OUTAGES_CACHE_KEY, body, max_age);

    Ok(OutageSet {
        outages,
        cache_hit: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    const FEED_BODY: &str = r#"[{"id": 1, "polygon": [0, 0, 10, 0, 5, 10]}, {"id": 2}]"#;
    const MAX_AGE: Duration = Duration::from_secs(300);

    #[tokio::test]
    async fn test_miss_fetches_and_populates_cache() {
        let cache = MemoryCache::new();
        let feed = StubFeed::ok(FEED_BODY);

        let set = assert_ok!(load_outages(&cache, &feed, MAX_AGE).await);
        assert!(!set.cache_hit);
        assert_eq!(set.outages.len(), 2);
        assert_eq!(set.outages[0].id, 1);
        assert_eq!(feed.calls(), 1);
        assert_eq!(cache.get(OUTAGES_CACHE_KEY).as_deref(), Some(FEED_BODY));
    }

    #[tokio::test]
    async fn test_hit_skips_upstream() {
        let cache = MemoryCache::new();
        let feed = StubFeed::ok(FEED_BODY);

        assert_ok!(load_outages(&cache, &feed, MAX_AGE).await);
        let set = assert_ok!(load_outages(&cache, &feed, MAX_AGE).await);

        assert!(set.cache_hit);
        assert_eq!(set.outages.len(), 2);
        assert_eq!(feed.calls(), 1);
    }

    #[tokio::test]
    async fn test_preloaded_cache_is_used() {
        let cache = MemoryCache::new();
        cache.put(OUTAGES_CACHE_KEY, "[]".to_string(), MAX_AGE);
        let feed = StubFeed::failing(503);

        let set = assert_ok!(load_outages(&cache, &feed, MAX_AGE).await);
        assert!(set.cache_hit);
        assert!(set.outages.is_empty());
        assert_eq!(feed.calls(), 0);
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates_status() {
        let cache = MemoryCache::new();
        let feed = StubFeed::failing(503);

        let err = assert_err!(load_outages(&cache, &feed, MAX_AGE).await);
        assert!(matches!(err, FetchError::Upstream(503)));
        assert_eq!(err.to_string(), "BC Hydro API returned 503");
        assert_eq!(cache.get(OUTAGES_CACHE_KEY), None);
    }

    #[tokio::test]
    async fn test_no_retry_after_failure() {
        let cache = MemoryCache::new();
        let feed = StubFeed::failing(500);

        assert_err!(load_outages(&cache, &feed, MAX_AGE).await);
        assert_err!(load_outages(&cache, &feed, MAX_AGE).await);
        assert_eq!(feed.calls(), 2);
    }

    #[tokio::test]
    async fn test_malformed_body_is_not_cached() {
        let cache = MemoryCache::new();
        let feed = StubFeed::ok(r#"{"error": "maintenance"}"#);

        let err = assert_err!(load_outages(&cache, &feed, MAX_AGE).await);
        assert!(matches!(err, FetchError::Malformed(_)));
        assert_eq!(cache.get(OUTAGES_CACHE_KEY), None);
    }

    #[tokio::test]
    async fn test_one_odd_record_keeps_the_rest() {
        let cache = MemoryCache::new();
        let body = r#"[
            {"id": 1, "numCustomersOut": 12.5, "polygon": [0, 0, 10, 0, 5, 10]},
            {"id": 2, "numCustomersOut": -1, "dateOff": "yesterday"},
            {"id": 3, "polygon": [0, 0, 10, 0, 10, 10, 0, 10]}
        ]"#;
        let feed = StubFeed::ok(body);

        let set = assert_ok!(load_outages(&cache, &feed, MAX_AGE).await);
        assert_eq!(set.outages.len(), 3);
        assert_eq!(set.outages[0].num_customers_out, 12.5);
        assert_eq!(set.outages[2].id, 3);
        assert_eq!(cache.get(OUTAGES_CACHE_KEY).as_deref(), Some(body));
    }

    #[tokio::test]
    async fn test_malformed_cached_body_is_an_error() {
        let cache = MemoryCache::new();
        cache.put(OUTAGES_CACHE_KEY, "garbage".to_string(), MAX_AGE);
        let feed = StubFeed::ok(FEED_BODY);

        let err = assert_err!(load_outages(&cache, &feed, MAX_AGE).await);
        assert!(matches!(err, FetchError::Malformed(_)));
        assert_eq!(feed.calls(), 0);
    }
}

//! Key/value cache for the raw outage feed.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// A shared cache with per-entry expiry.
///
/// Reads and writes are individually atomic; nothing coordinates a read
/// followed by a write, so concurrent misses may both repopulate the entry.
pub trait CacheStore: Send + Sync {
    /// Return the live value under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key` for `ttl`.
    fn put(&self, key: &str, value: String, ttl: Duration);
}

struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-process [`CacheStore`].
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        let live = entries
            .get(key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.value.clone());

        if live.is_none() {
            entries.remove(key);
        }
        live
    }

    fn put(&self, key: &str, value: String, ttl: Duration) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
    }
}

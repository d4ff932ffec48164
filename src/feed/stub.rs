//! In-memory feed for tests.

use super::{FetchError, OutageFeed};

use std::sync::atomic::{AtomicUsize, Ordering};

/// Feed that answers from memory and counts calls.
pub struct StubFeed {
    response: Result<String, u16>,
    calls: AtomicUsize,
}

impl StubFeed {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { response: Ok(body.into()), calls: AtomicUsize::new(0) }
    }

    pub fn failing(status: u16) -> Self {
        Self { response: Err(status), calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl OutageFeed for StubFeed {
    async fn fetch(&self) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone().map_err(FetchError::Upstream)
    }
}

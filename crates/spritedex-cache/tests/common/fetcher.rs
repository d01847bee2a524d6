//! Instrumented in-process fetcher.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use spritedex_cache::{AssetFetcherPort, SpriteError};
use url::Url;

/// Serves the URL path as the body unless a canned response is registered.
///
/// Paths containing `fail` answer 500. Tracks total calls and the peak number
/// of concurrent `fetch` calls.
#[derive(Default)]
pub struct FakeFetcher {
    canned: Mutex<HashMap<String, Result<Bytes, SpriteError>>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

#[allow(dead_code)]
impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep this long inside every fetch.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Register a fixed response for `url`.
    pub fn respond(&self, url: &str, response: Result<Bytes, SpriteError>) {
        self.canned.lock().unwrap().insert(url.to_string(), response);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetFetcherPort for FakeFetcher {
    async fn fetch(&self, url: &Url) -> Result<Bytes, SpriteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let canned = self.canned.lock().unwrap().get(url.as_str()).cloned();
        let result = canned.unwrap_or_else(|| {
            if url.path().contains("fail") {
                Err(SpriteError::bad_status(url.as_str(), 500))
            } else {
                Ok(Bytes::from(url.path().to_string()))
            }
        });

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

//! In-process TTL cache built on `moka`.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use super::service::CacheService;

/// Bounded in-memory cache of `code -> long URL` with a fixed time-to-live.
pub struct MokaCache {
    inner: Cache<String, String>,
}

impl MokaCache {
    /// Creates a cache holding at most `max_capacity` entries for `ttl` each.
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        debug!(
            "MokaCache initialized with max capacity: {}, TTL: {}s",
            max_capacity,
            ttl.as_secs()
        );

        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();

        Self { inner }
    }
}

#[async_trait]
impl CacheService for MokaCache {
    async fn get_url(&self, code: &str) -> Option<String> {
        let hit = self.inner.get(code).await;
        match &hit {
            Some(url) => debug!("Cache HIT: {} -> {}", code, url),
            None => debug!("Cache MISS: {}", code),
        }
        hit
    }

    async fn set_url(&self, code: &str, long_url: &str) {
        self.inner
            .insert(code.to_string(), long_url.to_string())
            .await;
        debug!("Cache SET: {} -> {}", code, long_url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = MokaCache::new(100, Duration::from_secs(60));

        assert_eq!(cache.get_url("abc").await, None);
        cache.set_url("abc", "https://example.com").await;
        assert_eq!(
            cache.get_url("abc").await,
            Some("https://example.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_entries_expire() {
        let cache = MokaCache::new(100, Duration::from_millis(50));
        cache.set_url("abc", "https://example.com").await;

        tokio::time::sleep(Duration::from_millis(120)).await;

        assert_eq!(cache.get_url("abc").await, None);
    }
}

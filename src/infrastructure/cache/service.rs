//! Cache service trait.

use async_trait::async_trait;

/// Passive read-through cache for short code lookups.
///
/// Entries expire after a fixed TTL and are never invalidated explicitly, so
/// a cached URL can lag the store by at most that TTL. The cache is never
/// written on save; it is filled only after a successful store read.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MokaCache`] - in-process cache with TTL
/// - [`crate::infrastructure::cache::NullCache`] - no-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached long URL for a short code, if present and fresh.
    async fn get_url(&self, code: &str) -> Option<String>;

    /// Caches a long URL read from the store.
    async fn set_url(&self, code: &str, long_url: &str);
}

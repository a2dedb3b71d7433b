//! Caching layer for fast redirect lookups.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`MokaCache`] - In-process TTL cache
//! - [`NullCache`] - No-op implementation for testing/disabled caching

mod moka_cache;
mod null_cache;
mod service;

pub use moka_cache::MokaCache;
pub use null_cache::NullCache;
pub use service::CacheService;

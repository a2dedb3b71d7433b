//! Business-level storage contract for short links and hit counters.

use async_trait::async_trait;

use crate::domain::entities::HitRecord;
use crate::domain::error::StoreError;

/// Store for URL mappings and their hit statistics.
///
/// # Implementations
///
/// - [`crate::application::services::LinkStore`] - built on a
///   [`super::KvBackend`] and a [`crate::domain::clock::Clock`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Looks up the long URL for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the code was never saved and
    /// [`StoreError::Backend`] on any other failure.
    async fn get_url(&self, code: &str) -> Result<String, StoreError>;

    /// Saves a long URL under its deterministic short code and returns the
    /// code. An existing mapping under the same code is overwritten.
    async fn save_url(&self, long_url: &str) -> Result<String, StoreError>;

    /// Reads the aggregated hit record for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no hit hash exists and
    /// [`StoreError::Parse`] if stored counters are malformed.
    async fn get_hits(&self, code: &str) -> Result<HitRecord, StoreError>;

    /// Records one hit: bumps `Total` and today's day-of-year counter.
    ///
    /// The two updates are separate backend calls. If the second fails the
    /// first is kept and the error is returned.
    async fn increment_hits(&self, code: &str) -> Result<(), StoreError>;
}

//! Short link storage built on a generic key-value backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::clock::Clock;
use crate::domain::entities::HitRecord;
use crate::domain::error::StoreError;
use crate::domain::hit_aggregator::{aggregate, hit_fields_for};
use crate::domain::keys::{hits_key, url_key};
use crate::domain::repositories::{KvBackend, UrlStore};
use crate::utils::code_generator::encode_short_code;

/// [`UrlStore`] implementation expressed purely in terms of [`KvBackend`].
///
/// Key layout:
///
/// - `url:<code>` - string holding the long URL
/// - `hits:<code>` - hash with a `Total` field and one field per day-of-year
pub struct LinkStore<B: KvBackend + ?Sized, C: Clock> {
    backend: Arc<B>,
    clock: Arc<C>,
}

impl<B: KvBackend + ?Sized, C: Clock> LinkStore<B, C> {
    /// Creates a new link store.
    pub fn new(backend: Arc<B>, clock: Arc<C>) -> Self {
        Self { backend, clock }
    }

    /// Returns the underlying backend.
    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }
}

#[async_trait]
impl<B: KvBackend + ?Sized, C: Clock> UrlStore for LinkStore<B, C> {
    async fn get_url(&self, code: &str) -> Result<String, StoreError> {
        self.backend
            .get_key(&url_key(code))
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn save_url(&self, long_url: &str) -> Result<String, StoreError> {
        let code = encode_short_code(long_url);
        self.backend.set_key(&url_key(&code), long_url).await?;

        debug!("Saved {} -> {}", code, long_url);
        Ok(code)
    }

    async fn get_hits(&self, code: &str) -> Result<HitRecord, StoreError> {
        let key = hits_key(code);

        if !self.backend.hash_exists(&key).await? {
            return Err(StoreError::NotFound);
        }

        let raw = self.backend.get_hash(&key).await?;
        Ok(aggregate(&raw, self.clock.now())?)
    }

    async fn increment_hits(&self, code: &str) -> Result<(), StoreError> {
        let key = hits_key(code);

        for field in hit_fields_for(self.clock.now()) {
            self.backend.increment_hash(&key, &field).await?;
        }

        Ok(())
    }
}

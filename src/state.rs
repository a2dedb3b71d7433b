//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::domain::repositories::UrlStore;
use crate::infrastructure::cache::CacheService;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UrlStore>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(store: Arc<dyn UrlStore>, cache: Arc<dyn CacheService>) -> Self {
        Self { store, cache }
    }
}

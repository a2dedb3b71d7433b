#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::sync::Arc;
use redis_shortener::application::services::LinkStore;
use redis_shortener::domain::clock::FixedClock;
use redis_shortener::infrastructure::cache::{CacheService, NullCache};
use redis_shortener::infrastructure::persistence::InMemoryBackend;
use redis_shortener::routes::app_router;
use redis_shortener::state::AppState;

/// Day 168 of 2016 (June 16th), midnight UTC.
pub fn fixture_now() -> DateTime<Utc> {
    NaiveDate::from_yo_opt(2016, 168)
        .unwrap()
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// Backend holding the three seeded links and the `ghjk` hit counters.
pub fn seeded_backend() -> Arc<InMemoryBackend> {
    let backend = InMemoryBackend::new();
    backend.insert_key("url:blah", "google.com");
    backend.insert_key("url:ghjk", "lmgtfy.com");
    backend.insert_key("url:foobar", "boo.baz");
    backend.insert_hash(
        "hits:ghjk",
        &[("Total", "387"), ("3", "31"), ("204", "14"), ("308", "76")],
    );
    Arc::new(backend)
}

pub fn create_test_state(backend: Arc<InMemoryBackend>) -> AppState {
    create_test_state_with_cache(backend, Arc::new(NullCache::new()))
}

pub fn create_test_state_with_cache(
    backend: Arc<InMemoryBackend>,
    cache: Arc<dyn CacheService>,
) -> AppState {
    let store = LinkStore::new(backend, Arc::new(FixedClock::new(fixture_now())));
    AppState::new(Arc::new(store), cache)
}

pub fn create_test_server(backend: Arc<InMemoryBackend>) -> TestServer {
    TestServer::new(app_router(create_test_state(backend))).unwrap()
}

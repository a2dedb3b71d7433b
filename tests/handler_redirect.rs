mod common;

use async_trait::async_trait;
use axum_test::TestServer;
use redis_shortener::domain::entities::HitRecord;
use redis_shortener::domain::error::{BackendError, StoreError};
use redis_shortener::domain::repositories::UrlStore;
use redis_shortener::infrastructure::cache::{CacheService, MokaCache, NullCache};
use redis_shortener::routes::app_router;
use redis_shortener::state::AppState;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Store whose reads work and whose hit updates always fail.
struct ReadOnlyStore;

#[async_trait]
impl UrlStore for ReadOnlyStore {
    async fn get_url(&self, code: &str) -> Result<String, StoreError> {
        match code {
            "foobar" => Ok("boo.baz".to_string()),
            "down" => Err(StoreError::Backend(BackendError::Connection(
                "refused".to_string(),
            ))),
            _ => Err(StoreError::NotFound),
        }
    }

    async fn save_url(&self, _long_url: &str) -> Result<String, StoreError> {
        Err(StoreError::Backend(BackendError::Operation("READONLY".to_string())))
    }

    async fn get_hits(&self, _code: &str) -> Result<HitRecord, StoreError> {
        Err(StoreError::NotFound)
    }

    async fn increment_hits(&self, _code: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend(BackendError::Operation("READONLY".to_string())))
    }
}

#[tokio::test]
async fn test_redirect_success() {
    let server = common::create_test_server(common::seeded_backend());

    let response = server.get("/foobar").await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "boo.baz");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::create_test_server(common::seeded_backend());

    let response = server.get("/redsox").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["details"]["code"], "redsox");
}

#[tokio::test]
async fn test_redirect_records_hit() {
    let backend = common::seeded_backend();
    let server = common::create_test_server(backend.clone());

    server.get("/blah").await;
    server.get("/blah").await;

    let hits = backend.hash("hits:blah").unwrap();
    assert_eq!(hits["Total"], "2");
    assert_eq!(hits["168"], "2");
}

#[tokio::test]
async fn test_redirect_unknown_code_records_nothing() {
    let backend = common::seeded_backend();
    let server = common::create_test_server(backend.clone());

    server.get("/redsox").await.assert_status_not_found();

    assert_eq!(backend.hash("hits:redsox"), None);
}

#[tokio::test]
async fn test_redirect_survives_failed_hit_update() {
    let state = AppState::new(Arc::new(ReadOnlyStore), Arc::new(NullCache::new()));
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get("/foobar").await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "boo.baz");
}

#[tokio::test]
async fn test_redirect_backend_failure_is_500() {
    let state = AppState::new(Arc::new(ReadOnlyStore), Arc::new(NullCache::new()));
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get("/down").await;

    response.assert_status_internal_server_error();
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Url could not be retrieved");
}

#[tokio::test]
async fn test_redirect_served_from_cache() {
    let backend = common::seeded_backend();
    let cache = Arc::new(MokaCache::new(100, Duration::from_secs(300)));
    let state = common::create_test_state_with_cache(backend.clone(), cache.clone());
    let server = TestServer::new(app_router(state)).unwrap();

    server.get("/foobar").await;
    assert_eq!(cache.get_url("foobar").await.as_deref(), Some("boo.baz"));

    // The cached mapping wins until it expires.
    backend.insert_key("url:foobar", "elsewhere.example");
    let response = server.get("/foobar").await;

    assert_eq!(response.header("location"), "boo.baz");
    assert_eq!(backend.hash("hits:foobar").unwrap()["Total"], "2");
}

#[tokio::test]
async fn test_redirect_url_with_control_character_is_500() {
    let backend = common::seeded_backend();
    let server = common::create_test_server(backend.clone());

    let created: Value = server
        .post("/create")
        .json(&serde_json::json!({ "Url": "http://a.com/\nx" }))
        .await
        .json();
    let code = created["Url"].as_str().unwrap().to_string();

    let response = server.get(&format!("/{}", code)).await;

    response.assert_status_internal_server_error();
    assert!(response.headers().get("location").is_none());
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Url could not be retrieved");
    assert_eq!(backend.hash(&format!("hits:{}", code)), None);
}

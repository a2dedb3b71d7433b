//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Check the passive cache for the code
/// 2. On a miss, read the store and cache the result
/// 3. Build the `Location` header from the stored URL
/// 4. Record a hit (`Total` and today's counter)
/// 5. Return 301 Moved Permanently
///
/// A failed hit update is logged and does not block the redirect.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error on other store failures, or when the
/// stored URL cannot be sent as a header value. No hit is recorded then.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let long_url = match state.cache.get_url(&code).await {
        Some(cached_url) => cached_url,
        None => {
            let long_url = state.store.get_url(&code).await.map_err(|e| {
                AppError::from_store(
                    e,
                    &code,
                    "Shortlink does not exist",
                    "Url could not be retrieved",
                )
            })?;

            state.cache.set_url(&code, &long_url).await;
            long_url
        }
    };

    let location = HeaderValue::from_str(&long_url).map_err(|e| {
        error!(code = %code, "Stored url is not a valid Location header: {}", e);
        AppError::internal("Url could not be retrieved", json!({}))
    })?;

    if let Err(e) = state.store.increment_hits(&code).await {
        error!(code = %code, "Failed to record hit: {}", e);
    }

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlStore;
    use crate::infrastructure::cache::{CacheService, MokaCache};
    use mockall::predicate::eq;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cache_hit_skips_store_lookup_but_counts_hit() {
        let cache = Arc::new(MokaCache::new(10, Duration::from_secs(60)));
        cache.set_url("abc", "example.com").await;

        let mut store = MockUrlStore::new();
        store.expect_get_url().never();
        store
            .expect_increment_hits()
            .with(eq("abc"))
            .times(1)
            .returning(|_| Ok(()));

        let state = AppState::new(Arc::new(store), cache);
        let response = redirect_handler(Path("abc".to_string()), State(state))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers()[header::LOCATION], "example.com");
    }

    #[tokio::test]
    async fn test_unsendable_url_is_500_without_hit() {
        let cache = Arc::new(MokaCache::new(10, Duration::from_secs(60)));
        cache.set_url("abc", "http://a.com/\nx").await;

        let mut store = MockUrlStore::new();
        store.expect_get_url().never();
        store.expect_increment_hits().never();

        let state = AppState::new(Arc::new(store), cache);
        let err = redirect_handler(Path("abc".to_string()), State(state))
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

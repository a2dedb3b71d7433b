//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /healthcheck`   - Liveness check
//! - `POST /create`        - Shorten a URL
//! - `GET  /{code}`        - Short link redirect (records a hit)
//! - `GET  /stats/{code}`  - Hit statistics for a short code
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api::handlers::{create_handler, health_handler, redirect_handler, stats_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(health_handler))
        .route("/create", post(create_handler))
        .route("/{code}", get(redirect_handler))
        .route("/stats/{code}", get(stats_handler))
        .with_state(state)
        .layer(tracing::layer())
}

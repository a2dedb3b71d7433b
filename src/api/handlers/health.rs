//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /healthcheck`
///
/// # Response
///
/// ```json
/// {"Status": "ok"}
/// ```
///
/// The backend is not contacted; use the admin CLI's `check` command to
/// probe Redis.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

//! DTO for the health check endpoint.

use serde::Serialize;

/// Liveness response, serialized as `{"Status":"ok"}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

//! Handler for link creation endpoint.

use axum::{Json, body::Bytes, extract::State};
use serde_json::json;
use tracing::{debug, error};

use crate::api::dto::create::{CreateRequest, CreateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Saves a long URL and returns its short code.
///
/// # Endpoint
///
/// `POST /create`
///
/// # Request Body
///
/// ```json
/// {"Url": "http://www.nationalreview.com"}
/// ```
///
/// The body is parsed as JSON whatever the `Content-Type` header says. The
/// `Url` key is matched case-insensitively; a missing key or a `null` body
/// saves the empty URL under the empty code.
///
/// # Response
///
/// ```json
/// {"Url": "bs1I92"}
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON, is not an object, or
/// carries a non-string `Url`.
/// Returns 500 Internal Server Error if the store write fails.
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreateResponse>, AppError> {
    let request: CreateRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejected create request: {}", e);
        AppError::bad_request("Could not parse body as json", json!({}))
    })?;

    let code = state.store.save_url(&request.url).await.map_err(|e| {
        error!("Could not save url: {}", e);
        AppError::internal("Could not save url", json!({}))
    })?;

    Ok(Json(CreateResponse { url: code }))
}

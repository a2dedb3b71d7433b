//! Handler for link hit statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves hit statistics for a short code.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Response
///
/// ```json
/// {
///   "Count": 387,
///   "Days": {
///     "2015-07-22T00:00:00Z": 14,
///     "2015-11-03T00:00:00Z": 76,
///     "2016-01-03T00:00:00Z": 31
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the code has never been visited.
/// Returns 500 Internal Server Error on store failures or corrupt counters.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let hits = state.store.get_hits(&code).await.map_err(|e| {
        AppError::from_store(e, &code, "Stats do not exist", "Could not fetch stats")
    })?;

    Ok(Json(StatsResponse::from(hits)))
}

//! Handler for route statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns click statistics for a short key.
///
/// # Endpoint
///
/// `GET /v1/stats/{key}`
///
/// Validates that the key still maps to a route, then counts its recorded
/// clicks. Both must succeed or the whole request fails; no partial
/// results.
///
/// # Errors
///
/// Returns 404 for an unknown key, 503/500 on store errors.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats.stats_for_key(&key).await?;
    Ok(Json(stats.into()))
}

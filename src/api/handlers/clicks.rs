//! Handler for click recording.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::clicks::RecordClickRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Accepts a click event for asynchronous recording.
///
/// # Endpoint
///
/// `POST /v1/click`
///
/// The event is queued for the background worker and `202 Accepted` is
/// returned immediately. Durability is not awaited, so a crash between
/// acceptance and the ledger write loses that click (accepted tradeoff).
///
/// # Errors
///
/// Returns 400 if `key` is missing or empty; no store call is made in
/// that case.
pub async fn record_click_handler(
    State(state): State<AppState>,
    Json(payload): Json<RecordClickRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    state.clicks.submit(payload.into())?;

    Ok(StatusCode::ACCEPTED)
}

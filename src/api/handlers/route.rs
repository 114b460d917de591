//! Handlers for route creation and resolution.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::route::{CreateRouteRequest, RouteResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new route for a target URL.
///
/// # Endpoint
///
/// `POST /v1/route`
///
/// Generates a unique short key and commits the mapping; the response
/// echoes the target with the key that now resolves to it.
///
/// # Errors
///
/// Returns 400 if `target` is missing or empty, 500 if key generation
/// exhausts its collision bound, 503 if the key store is unreachable.
pub async fn create_route_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    payload.validate()?;

    let route = state.generator.generate(&payload.target).await?;

    tracing::info!(key = %route.key, "route created");

    Ok(Json(route.into()))
}

/// Resolves a short key to its route.
///
/// # Endpoint
///
/// `GET /v1/route/{key}`
///
/// The edge service calls this to serve a redirect; the actual HTTP
/// redirect to the target happens there, not here.
///
/// # Errors
///
/// Returns 404 for an unknown key and 503 while the key store is
/// unreachable or failing over; the two conditions are never conflated.
pub async fn resolve_route_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<RouteResponse>, AppError> {
    let route = state.resolver.resolve(&key).await?;
    Ok(Json(route.into()))
}

//! API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    create_route_handler, health_handler, record_click_handler, resolve_route_handler,
    stats_handler,
};
use crate::api::middleware;
use crate::state::AppState;

/// Builds the full application router.
///
/// # Endpoints
///
/// - `POST /v1/route`       - Create a route (generate key, commit mapping)
/// - `GET  /v1/route/{key}` - Resolve a key to its target
/// - `POST /v1/click`       - Record a click event (async, 202)
/// - `GET  /v1/stats/{key}` - Route statistics (target + click count)
/// - `GET  /health`         - Component health report
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/route", post(create_route_handler))
        .route("/v1/route/{key}", get(resolve_route_handler))
        .route("/v1/click", post(record_click_handler))
        .route("/v1/stats/{key}", get(stats_handler))
        .layer(middleware::tracing::layer())
        .with_state(state)
}

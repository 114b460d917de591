//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Key store**: Redis PING through the failover client
/// 2. **Click store**: trivial query against PostgreSQL
/// 3. **Click queue**: channel open, with remaining capacity
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let key_store_check = check_key_store(&state).await;
    let click_store_check = check_click_store(&state).await;
    let queue_check = check_click_queue(&state);

    let all_healthy = key_store_check.status == "ok"
        && click_store_check.status == "ok"
        && queue_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            key_store: key_store_check,
            click_store: click_store_check,
            click_queue: queue_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_key_store(state: &AppState) -> CheckStatus {
    if state.key_store.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Key store reachable".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Key store connection failed".to_string()),
        }
    }
}

async fn check_click_store(state: &AppState) -> CheckStatus {
    if state.ledger.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Click store reachable".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Click store connection failed".to_string()),
        }
    }
}

fn check_click_queue(state: &AppState) -> CheckStatus {
    if state.click_tx.is_closed() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Click queue is closed".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Capacity: {}", state.click_tx.capacity())),
        }
    }
}

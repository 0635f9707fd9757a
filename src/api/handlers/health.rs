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
/// - **200 OK**: Review store reachable
/// - **503 Service Unavailable**: Review store failed
///
/// # Components Checked
///
/// 1. **Review store**: Counts stored reviews
/// 2. **Event channel**: Reports live subscribers (informational)
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "review_store": { "status": "ok", "message": "12 reviews stored" },
///     "event_channel": { "status": "ok", "message": "1 subscriber(s)" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_review_store(&state).await;
    let channel_check = check_event_channel(&state);

    let healthy = store_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            review_store: store_check,
            event_channel: channel_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_review_store(state: &AppState) -> CheckStatus {
    match state.review_service.total_count().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{count} reviews stored")),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Review store error: {e}")),
        },
    }
}

/// Without subscribers events are dropped, which is harmless; reported as `idle`.
fn check_event_channel(state: &AppState) -> CheckStatus {
    let subscribers = state.review_service.repository().subscriber_count();

    CheckStatus {
        status: if subscribers > 0 { "ok" } else { "idle" }.to_string(),
        message: Some(format!("{subscribers} subscriber(s)")),
    }
}

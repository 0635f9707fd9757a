//! Handler for booking price quotes.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::quote::{QuoteRequest, QuoteResponse};
use crate::domain::pricing::quote_stay;
use crate::error::AppError;
use crate::state::AppState;

/// Prices a stay: capped nightly rate × nights × rooms.
///
/// # Endpoint
///
/// `POST /api/bookings/quote`
///
/// # Request Body
///
/// ```json
/// {
///   "check_in": "2026-05-01",
///   "check_out": "2026-05-04",
///   "rooms": 2,
///   "nightly_rate": 1200.0
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for zero rooms, too many rooms or a negative rate.
pub async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let quote = quote_stay(
        payload.nightly_rate,
        payload.check_in,
        payload.check_out,
        payload.rooms,
        state.max_rooms_per_booking,
    )
    .map_err(|e| AppError::bad_request(e.to_string(), json!({})))?;

    Ok(Json(QuoteResponse {
        check_in: payload.check_in,
        check_out: payload.check_out,
        quote,
    }))
}

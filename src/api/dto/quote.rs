//! DTOs for the booking quote endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::pricing::BookingQuote;

/// Request to price a stay.
#[derive(Debug, Deserialize, Validate)]
pub struct QuoteRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,

    #[validate(range(min = 1, message = "At least one room must be booked"))]
    pub rooms: u32,

    #[validate(range(min = 0.0, message = "Nightly rate must not be negative"))]
    pub nightly_rate: f64,
}

/// Priced stay.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(flatten)]
    pub quote: BookingQuote,
}

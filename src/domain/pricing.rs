//! Booking price recomputation.
//!
//! A booking total is `nightly rate × nights × rooms`, where the nightly rate is
//! capped at [`MAX_NIGHTLY_RATE`] and a stay always counts at least one night.

use chrono::NaiveDate;
use serde::Serialize;

/// Highest nightly rate a listing may charge.
pub const MAX_NIGHTLY_RATE: f64 = 5000.0;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PricingError {
    #[error("At least one room must be booked")]
    NoRooms,

    #[error("Too many rooms: {requested} requested, at most {max} allowed")]
    TooManyRooms { requested: u32, max: u32 },

    #[error("Nightly rate must be a non-negative number, got {0}")]
    InvalidRate(f64),
}

/// Computed price of a stay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BookingQuote {
    pub nights: u32,
    pub rooms: u32,
    /// Nightly rate after capping.
    pub nightly_rate: f64,
    pub total: f64,
}

/// Number of nights between two dates.
///
/// Same-day and reversed ranges count as one night.
pub fn calculate_nights(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    let days = (check_out - check_in).num_days();
    u32::try_from(days).ok().filter(|&d| d > 0).unwrap_or(1)
}

/// Caps a nightly rate at [`MAX_NIGHTLY_RATE`].
pub fn cap_nightly_rate(rate: f64) -> f64 {
    rate.min(MAX_NIGHTLY_RATE)
}

/// Prices a stay of `nights` nights in `rooms` rooms.
///
/// # Errors
///
/// - [`PricingError::NoRooms`] if `rooms` is zero
/// - [`PricingError::TooManyRooms`] if `rooms` exceeds `max_rooms`
/// - [`PricingError::InvalidRate`] if `rate` is negative, NaN or infinite
pub fn quote(
    rate: f64,
    nights: u32,
    rooms: u32,
    max_rooms: u32,
) -> Result<BookingQuote, PricingError> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(PricingError::InvalidRate(rate));
    }
    if rooms == 0 {
        return Err(PricingError::NoRooms);
    }
    if rooms > max_rooms {
        return Err(PricingError::TooManyRooms {
            requested: rooms,
            max: max_rooms,
        });
    }

    let nights = nights.max(1);
    let nightly_rate = cap_nightly_rate(rate);
    let total = nightly_rate * f64::from(nights) * f64::from(rooms);

    Ok(BookingQuote {
        nights,
        rooms,
        nightly_rate,
        total,
    })
}

/// Prices a stay between two dates. See [`quote`].
pub fn quote_stay(
    rate: f64,
    check_in: NaiveDate,
    check_out: NaiveDate,
    rooms: u32,
    max_rooms: u32,
) -> Result<BookingQuote, PricingError> {
    quote(rate, calculate_nights(check_in, check_out), rooms, max_rooms)
}

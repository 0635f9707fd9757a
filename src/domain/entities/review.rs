//! Review entity representing a guest's rating of a hotel.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A submitted hotel review.
///
/// Reviews are immutable once created, except for the `helpful` counter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub id: u64,
    pub hotel_id: i64,
    pub author_id: i64,
    /// Star rating, 1 to 5 inclusive.
    pub rating: u8,
    pub title: Option<String>,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub helpful: u32,
}

impl Review {
    /// Creates a new Review instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        hotel_id: i64,
        author_id: i64,
        rating: u8,
        title: Option<String>,
        comment: String,
        created_at: DateTime<Utc>,
        helpful: u32,
    ) -> Self {
        Self {
            id,
            hotel_id,
            author_id,
            rating,
            title,
            comment,
            created_at,
            helpful,
        }
    }
}

/// Input data for creating a new review.
///
/// The repository assigns `id`, `created_at` and a zero `helpful` counter.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub hotel_id: i64,
    pub author_id: i64,
    /// Star rating, already checked against the 1–5 range.
    pub rating: u8,
    pub title: Option<String>,
    pub comment: String,
}

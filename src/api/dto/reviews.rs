//! DTOs for review endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::pagination::PageInfo;
use crate::domain::entities::Review;
use crate::domain::rating::{AggregateRating, RatingLabel};

/// Request to submit a hotel review.
///
/// The star range is not checked here: out-of-range ratings are handled by the
/// configured rating policy in the service.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(range(min = 1))]
    pub hotel_id: i64,

    #[validate(range(min = 1))]
    pub author_id: i64,

    pub rating: i64,

    #[validate(length(max = 120))]
    pub title: Option<String>,

    #[validate(length(max = 2000))]
    #[serde(default)]
    pub comment: String,
}

/// A page of reviews.
#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    pub items: Vec<Review>,
    pub pagination: PageInfo,
}

/// Aggregate rating as shown on a hotel badge.
#[derive(Debug, Serialize)]
pub struct RatingView {
    /// Mean star rating rounded to two decimals.
    pub average_stars: f64,
    pub display_score: f64,
    pub label: RatingLabel,
    pub count: usize,
}

impl From<AggregateRating> for RatingView {
    fn from(rating: AggregateRating) -> Self {
        Self {
            average_stars: (rating.average_stars * 100.0).round() / 100.0,
            display_score: rating.display_score,
            label: rating.label,
            count: rating.count,
        }
    }
}

/// Rating of one hotel. `rating` is `null` when the hotel has no reviews yet.
#[derive(Debug, Serialize)]
pub struct HotelRatingResponse {
    pub hotel_id: i64,
    pub rating: Option<RatingView>,
}

/// Total number of stored reviews.
#[derive(Debug, Serialize)]
pub struct ReviewCountResponse {
    pub total: usize,
}

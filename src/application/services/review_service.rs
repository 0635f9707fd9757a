//! Hotel review submission and rating service.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::entities::{NewReview, Review};
use crate::domain::rating::{AggregateRating, aggregate};
use crate::domain::repositories::ReviewRepository;
use crate::error::AppError;
use serde_json::json;

const MIN_STARS: i64 = 1;
const MAX_STARS: i64 = 5;

/// What to do with a submitted star rating outside 1–5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RatingPolicy {
    /// Refuse the review with a validation error.
    #[default]
    Reject,
    /// Store the nearest valid rating instead.
    Clamp,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown rating policy '{0}'")]
pub struct UnknownRatingPolicy(String);

impl FromStr for RatingPolicy {
    type Err = UnknownRatingPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "clamp" => Ok(Self::Clamp),
            _ => Err(UnknownRatingPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for RatingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => f.write_str("reject"),
            Self::Clamp => f.write_str("clamp"),
        }
    }
}

impl RatingPolicy {
    /// Brings a submitted rating into the 1–5 star range.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] under [`RatingPolicy::Reject`] when the
    /// rating is out of range.
    pub fn apply(&self, rating: i64) -> Result<u8, AppError> {
        if (MIN_STARS..=MAX_STARS).contains(&rating) {
            return Ok(rating as u8);
        }

        match self {
            Self::Reject => Err(AppError::bad_request(
                "Rating must be between 1 and 5",
                json!({ "rating": rating }),
            )),
            Self::Clamp => {
                tracing::debug!(rating, "Clamping out-of-range rating");
                Ok(rating.clamp(MIN_STARS, MAX_STARS) as u8)
            }
        }
    }
}

/// Service for submitting hotel reviews and reading aggregate ratings.
pub struct ReviewService<R: ReviewRepository> {
    repository: Arc<R>,
    policy: RatingPolicy,
}

impl<R: ReviewRepository> ReviewService<R> {
    /// Creates a new review service.
    pub fn new(repository: Arc<R>, policy: RatingPolicy) -> Self {
        Self { repository, policy }
    }

    /// Underlying repository, e.g. for subscribing to review events.
    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Submits a review for a hotel.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the rating is out of range and the
    /// policy is [`RatingPolicy::Reject`].
    pub async fn add_review(
        &self,
        hotel_id: i64,
        author_id: i64,
        rating: i64,
        title: Option<String>,
        comment: String,
    ) -> Result<Review, AppError> {
        let rating = self.policy.apply(rating)?;

        let review = self
            .repository
            .insert(NewReview {
                hotel_id,
                author_id,
                rating,
                title,
                comment,
            })
            .await?;

        metrics::counter!("reviews_created_total").increment(1);

        Ok(review)
    }

    /// Fetches a single review.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no review has this id.
    pub async fn get_review(&self, review_id: u64) -> Result<Review, AppError> {
        self.repository
            .find(review_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Review not found", json!({ "review_id": review_id }))
            })
    }

    /// Lists the reviews of a hotel.
    pub async fn hotel_reviews(&self, hotel_id: i64) -> Result<Vec<Review>, AppError> {
        self.repository.list_by_hotel(hotel_id).await
    }

    /// Lists the reviews written by a user.
    pub async fn user_reviews(&self, author_id: i64) -> Result<Vec<Review>, AppError> {
        self.repository.list_by_author(author_id).await
    }

    /// Aggregate rating of a hotel, or `None` if it has no reviews yet.
    pub async fn hotel_rating(&self, hotel_id: i64) -> Result<Option<AggregateRating>, AppError> {
        let reviews = self.repository.list_by_hotel(hotel_id).await?;
        Ok(aggregate(&reviews))
    }

    /// Records a "helpful" vote on a review.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no review has this id.
    pub async fn mark_helpful(&self, review_id: u64) -> Result<Review, AppError> {
        let review = self
            .repository
            .increment_helpful(review_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Review not found", json!({ "review_id": review_id }))
            })?;

        metrics::counter!("review_helpful_votes_total").increment(1);

        Ok(review)
    }

    /// Total number of stored reviews.
    pub async fn total_count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}

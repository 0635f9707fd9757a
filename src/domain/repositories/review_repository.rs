//! Repository trait for hotel review storage.

use crate::domain::entities::{NewReview, Review};
use crate::domain::review_event::ReviewEvent;
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::broadcast;

/// Repository interface for hotel reviews.
///
/// Besides storage, implementations act as the publish/subscribe channel for
/// review changes: every successful write is announced as a [`ReviewEvent`] to
/// all receivers obtained from [`ReviewRepository::subscribe`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryReviewRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Stores a new review, assigning its id, creation time and a zero
    /// `helpful` counter.
    async fn insert(&self, new_review: NewReview) -> Result<Review, AppError>;

    /// Finds a review by id.
    async fn find(&self, review_id: u64) -> Result<Option<Review>, AppError>;

    /// Lists the reviews of one hotel, oldest first.
    async fn list_by_hotel(&self, hotel_id: i64) -> Result<Vec<Review>, AppError>;

    /// Lists the reviews written by one user, oldest first.
    async fn list_by_author(&self, author_id: i64) -> Result<Vec<Review>, AppError>;

    /// Increments the `helpful` counter of a review.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Review))` with the updated review
    /// - `Ok(None)` if no review has this id
    async fn increment_helpful(&self, review_id: u64) -> Result<Option<Review>, AppError>;

    /// Counts all stored reviews.
    async fn count(&self) -> Result<usize, AppError>;

    /// Returns a receiver for subsequent review changes.
    fn subscribe(&self) -> broadcast::Receiver<ReviewEvent>;
}

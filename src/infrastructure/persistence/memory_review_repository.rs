//! In-memory implementation of the review repository.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{RwLock, broadcast};

use crate::domain::entities::{NewReview, Review};
use crate::domain::repositories::ReviewRepository;
use crate::domain::review_event::ReviewEvent;
use crate::error::AppError;

/// Process-local review store.
///
/// Reviews live in insertion order behind a `RwLock`; writes are announced on a
/// broadcast channel while the write lock is held, so events arrive in the order
/// the changes were applied. Publishing never fails the write: with no
/// subscribers the event is simply dropped.
pub struct InMemoryReviewRepository {
    reviews: RwLock<Vec<Review>>,
    next_id: AtomicU64,
    events: broadcast::Sender<ReviewEvent>,
}

impl InMemoryReviewRepository {
    /// Creates an empty store whose event channel buffers up to `event_capacity`
    /// undelivered events per subscriber.
    pub fn new(event_capacity: usize) -> Self {
        let (events, _) = broadcast::channel(event_capacity);
        Self {
            reviews: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            events,
        }
    }

    /// Number of live event subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }

    fn publish(&self, event: ReviewEvent) {
        if self.events.send(event).is_err() {
            tracing::trace!("No review event subscribers");
        }
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn insert(&self, new_review: NewReview) -> Result<Review, AppError> {
        let mut reviews = self.reviews.write().await;
        let review = Review::new(
            self.next_id.fetch_add(1, Ordering::Relaxed),
            new_review.hotel_id,
            new_review.author_id,
            new_review.rating,
            new_review.title,
            new_review.comment,
            Utc::now(),
            0,
        );

        reviews.push(review.clone());

        self.publish(ReviewEvent::Created {
            review_id: review.id,
            hotel_id: review.hotel_id,
            rating: review.rating,
        });

        Ok(review)
    }

    async fn find(&self, review_id: u64) -> Result<Option<Review>, AppError> {
        let reviews = self.reviews.read().await;
        Ok(reviews.iter().find(|r| r.id == review_id).cloned())
    }

    async fn list_by_hotel(&self, hotel_id: i64) -> Result<Vec<Review>, AppError> {
        let reviews = self.reviews.read().await;
        Ok(reviews
            .iter()
            .filter(|r| r.hotel_id == hotel_id)
            .cloned()
            .collect())
    }

    async fn list_by_author(&self, author_id: i64) -> Result<Vec<Review>, AppError> {
        let reviews = self.reviews.read().await;
        Ok(reviews
            .iter()
            .filter(|r| r.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn increment_helpful(&self, review_id: u64) -> Result<Option<Review>, AppError> {
        let mut reviews = self.reviews.write().await;
        let Some(review) = reviews.iter_mut().find(|r| r.id == review_id) else {
            return Ok(None);
        };

        review.helpful = review.helpful.saturating_add(1);
        let updated = review.clone();

        // Published under the write lock so subscribers see counts in order.
        self.publish(ReviewEvent::MarkedHelpful {
            review_id: updated.id,
            hotel_id: updated.hotel_id,
            helpful: updated.helpful,
        });

        Ok(Some(updated))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.reviews.read().await.len())
    }

    fn subscribe(&self) -> broadcast::Receiver<ReviewEvent> {
        self.events.subscribe()
    }
}

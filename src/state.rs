//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ReviewService;
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryReviewRepository;
use crate::utils::image_url::ValidationMode;

/// Review service over the concrete repository used by the server.
pub type AppReviewService = ReviewService<InMemoryReviewRepository>;

#[derive(Clone)]
pub struct AppState {
    pub review_service: Arc<AppReviewService>,
    pub image_validation: ValidationMode,
    pub max_batch_size: usize,
    pub max_rooms_per_booking: u32,
}

impl AppState {
    /// Builds state with an empty in-memory review store.
    pub fn from_config(config: &Config) -> Self {
        let repository = Arc::new(InMemoryReviewRepository::new(
            config.event_channel_capacity,
        ));

        Self {
            review_service: Arc::new(ReviewService::new(repository, config.rating_policy)),
            image_validation: config.image_validation,
            max_batch_size: config.max_batch_size,
            max_rooms_per_booking: config.max_rooms_per_booking,
        }
    }
}

//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod images;
pub mod quote;
pub mod reviews;

pub use health::health_handler;
pub use images::normalize_images_handler;
pub use quote::quote_handler;
pub use reviews::{
    create_review_handler, get_review_handler, hotel_rating_handler, hotel_reviews_handler,
    mark_helpful_handler, review_count_handler, user_reviews_handler,
};

//! API route configuration.
//!
//! Routes are grouped by the caller role they require; the groups are wrapped
//! with the matching [`crate::api::middleware::auth`] layer in
//! [`crate::routes::app_router`].

use crate::api::handlers::{
    create_review_handler, get_review_handler, hotel_rating_handler, hotel_reviews_handler,
    mark_helpful_handler, normalize_images_handler, quote_handler, review_count_handler,
    user_reviews_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes open to anonymous callers.
///
/// # Endpoints
///
/// - `GET /hotels/{hotel_id}/reviews` - Reviews of a hotel (paginated)
/// - `GET /hotels/{hotel_id}/rating`  - Aggregate rating of a hotel
/// - `GET /reviews/{id}`              - A single review
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/reviews/{id}", get(get_review_handler))
        .route("/hotels/{hotel_id}/reviews", get(hotel_reviews_handler))
        .route("/hotels/{hotel_id}/rating", get(hotel_rating_handler))
}

/// Routes for any signed-in caller.
///
/// # Endpoints
///
/// - `POST /reviews`                - Submit a review
/// - `POST /reviews/{id}/helpful`   - Vote a review helpful
/// - `GET  /users/{author_id}/reviews` - Reviews written by a user (paginated)
/// - `POST /bookings/quote`         - Price a stay
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/reviews", post(create_review_handler))
        .route("/reviews/{id}/helpful", post(mark_helpful_handler))
        .route("/users/{author_id}/reviews", get(user_reviews_handler))
        .route("/bookings/quote", post(quote_handler))
}

/// Routes for hotel owners.
///
/// # Endpoints
///
/// - `POST /images/normalize` - Normalize hotel image links (batch)
pub fn owner_routes() -> Router<AppState> {
    Router::new().route("/images/normalize", post(normalize_images_handler))
}

/// Routes for administrators.
///
/// # Endpoints
///
/// - `GET /admin/reviews/count` - Total stored reviews
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin/reviews/count", get(review_count_handler))
}

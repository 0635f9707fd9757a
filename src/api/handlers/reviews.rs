//! Handlers for review and rating endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::pagination::{PageInfo, PaginationParams};
use crate::api::dto::reviews::{
    CreateReviewRequest, HotelRatingResponse, ReviewCountResponse, ReviewListResponse,
};
use crate::domain::entities::{Review, Role};
use crate::error::AppError;
use crate::state::AppState;

/// Submits a review for a hotel.
///
/// # Endpoint
///
/// `POST /api/reviews`
///
/// # Request Body
///
/// ```json
/// {
///   "hotel_id": 42,
///   "author_id": 7,
///   "rating": 5,
///   "title": "Lovely stay",   // optional
///   "comment": "Spotless rooms"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, validation fails or the
/// rating is out of range under the `reject` policy.
pub async fn create_review_handler(
    State(state): State<AppState>,
    Extension(role): Extension<Role>,
    payload: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let review = state
        .review_service
        .add_review(
            payload.hotel_id,
            payload.author_id,
            payload.rating,
            payload.title,
            payload.comment,
        )
        .await?;

    tracing::info!(
        review_id = review.id,
        hotel_id = review.hotel_id,
        role = role.as_str(),
        "Review submitted"
    );

    Ok((StatusCode::CREATED, Json(review)))
}

/// Returns a single review.
///
/// # Endpoint
///
/// `GET /api/reviews/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the review does not exist.
pub async fn get_review_handler(
    State(state): State<AppState>,
    Path(review_id): Path<u64>,
) -> Result<Json<Review>, AppError> {
    let review = state.review_service.get_review(review_id).await?;
    Ok(Json(review))
}

/// Lists a hotel's reviews, oldest first.
///
/// # Endpoint
///
/// `GET /api/hotels/{hotel_id}/reviews?page=1&page_size=20`
pub async fn hotel_reviews_handler(
    State(state): State<AppState>,
    Path(hotel_id): Path<i64>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ReviewListResponse>, AppError> {
    let reviews = state.review_service.hotel_reviews(hotel_id).await?;
    paginate(reviews, &params).map(Json)
}

/// Lists the reviews written by a user.
///
/// # Endpoint
///
/// `GET /api/users/{author_id}/reviews?page=1&page_size=20`
pub async fn user_reviews_handler(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ReviewListResponse>, AppError> {
    let reviews = state.review_service.user_reviews(author_id).await?;
    paginate(reviews, &params).map(Json)
}

/// Returns the aggregate rating of a hotel.
///
/// # Endpoint
///
/// `GET /api/hotels/{hotel_id}/rating`
///
/// # Response
///
/// ```json
/// {
///   "hotel_id": 42,
///   "rating": {
///     "average_stars": 4.67,
///     "display_score": 9.3,
///     "label": "Excellent",
///     "count": 3
///   }
/// }
/// ```
///
/// `rating` is `null` while the hotel has no reviews.
pub async fn hotel_rating_handler(
    State(state): State<AppState>,
    Path(hotel_id): Path<i64>,
) -> Result<Json<HotelRatingResponse>, AppError> {
    let rating = state.review_service.hotel_rating(hotel_id).await?;

    Ok(Json(HotelRatingResponse {
        hotel_id,
        rating: rating.map(Into::into),
    }))
}

/// Records a "helpful" vote on a review.
///
/// # Endpoint
///
/// `POST /api/reviews/{id}/helpful`
///
/// # Errors
///
/// Returns 404 Not Found if the review does not exist.
pub async fn mark_helpful_handler(
    State(state): State<AppState>,
    Path(review_id): Path<u64>,
) -> Result<Json<Review>, AppError> {
    let review = state.review_service.mark_helpful(review_id).await?;
    Ok(Json(review))
}

/// Returns the number of stored reviews.
///
/// # Endpoint
///
/// `GET /api/admin/reviews/count`
pub async fn review_count_handler(
    State(state): State<AppState>,
) -> Result<Json<ReviewCountResponse>, AppError> {
    let total = state.review_service.total_count().await?;
    Ok(Json(ReviewCountResponse { total }))
}

fn paginate(
    reviews: Vec<Review>,
    params: &PaginationParams,
) -> Result<ReviewListResponse, AppError> {
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let total_items = reviews.len();
    let items = reviews.into_iter().skip(offset).take(limit).collect();

    Ok(ReviewListResponse {
        items,
        pagination: PageInfo::new(params.page(), params.page_size(), total_items),
    })
}

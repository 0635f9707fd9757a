//! # Hotel Stays
//!
//! Review aggregation, hotel image link normalization and booking quotes for a
//! hotel-booking platform, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, rating aggregation, pricing and repository traits
//! - **Application Layer** ([`application`]) - Review service and rating policy
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory review store
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Star reviews aggregated to a 0–10 display score with a verbal label
//! - "Helpful" votes on reviews
//! - Image link validation with Google Drive share-link rewriting
//! - Booking quotes with nightly-rate capping
//! - Role-guarded routes for customers, hotel owners and administrators
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:3000"
//! export RATING_POLICY="reject"   # or "clamp"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RatingPolicy, ReviewService};
    pub use crate::domain::entities::{NewReview, Review, Role};
    pub use crate::domain::rating::{AggregateRating, RatingLabel};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::image_url::{ValidationMode, normalize_image_url};
}

//! Domain layer containing business entities and logic.
//!
//! Everything here is independent of HTTP and storage concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`rating`] - Review rating aggregation
//! - [`pricing`] - Booking price recomputation
//! - [`review_event`] - Review change notifications
//! - [`event_worker`] - Background consumer of review events
//!
//! # Review Flow
//!
//! 1. HTTP handler validates the submission
//! 2. [`crate::application::services::ReviewService`] applies the rating policy
//! 3. [`repositories::ReviewRepository`] stores the review and publishes a
//!    [`review_event::ReviewEvent`]
//! 4. [`event_worker::run_review_event_logger`] and any other subscriber react

pub mod entities;
pub mod event_worker;
pub mod pricing;
pub mod rating;
pub mod repositories;
pub mod review_event;

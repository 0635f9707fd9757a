//! Review repository implementations.
//!
//! - [`InMemoryReviewRepository`] - process-local store with broadcast change events

pub mod memory_review_repository;

pub use memory_review_repository::InMemoryReviewRepository;

//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for service tests.

pub mod review_repository;

pub use review_repository::ReviewRepository;

#[cfg(test)]
pub use review_repository::MockReviewRepository;

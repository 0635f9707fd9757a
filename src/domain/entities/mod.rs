//! Core domain entities.
//!
//! Entities are plain data structures; creation input uses a separate `New*`
//! struct so repository-assigned fields never come from callers.
//!
//! # Entity Types
//!
//! - [`Review`] - A guest's rating of a hotel
//! - [`Role`] - Canonical caller role, with [`Area`] access rules

pub mod review;
pub mod role;

pub use review::{NewReview, Review};
pub use role::{Access, Area, Role, authorize};

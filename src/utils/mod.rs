//! Utility functions shared across layers.
//!
//! - [`image_url`] - Hotel image link validation, Google Drive rewriting and classification

pub mod image_url;

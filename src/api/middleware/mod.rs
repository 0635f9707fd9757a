//! HTTP middleware for request processing and protection.
//!
//! Provides role-based access checks and request tracing.

pub mod auth;
pub mod tracing;

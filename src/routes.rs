//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health` - Health check: review store, event channel (public)
//! - `/api/*`       - REST API, guarded per route group by caller role
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Role guard** - `X-User-Role` header checked against the route group
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// All routes with role guards and tracing, without path normalization.
pub fn router(state: AppState) -> Router {
    let api_router = Router::new()
        .merge(api::routes::public_routes())
        .merge(
            api::routes::customer_routes().route_layer(middleware::from_fn(auth::customer_layer)),
        )
        .merge(api::routes::owner_routes().route_layer(middleware::from_fn(auth::owner_layer)))
        .merge(api::routes::admin_routes().route_layer(middleware::from_fn(auth::admin_layer)));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer())
}

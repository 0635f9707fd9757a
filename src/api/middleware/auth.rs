//! Role-based access middleware.
//!
//! Bearer tokens are verified by the external auth backend, which forwards the
//! caller's role in the `X-User-Role` header. The role string is normalized with
//! [`Role::parse`] and checked against the route's [`Area`].

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderName},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::domain::entities::{Access, Area, Role, authorize};
use crate::error::AppError;

/// Header carrying the caller's resolved role.
pub static ROLE_HEADER: HeaderName = HeaderName::from_static("x-user-role");

/// Reads and normalizes the caller role from request headers.
///
/// Missing, non-UTF-8 and unrecognized values all yield `None`.
pub fn caller_role(headers: &HeaderMap) -> Option<Role> {
    headers
        .get(&ROLE_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(Role::parse)
}

/// Admits the request if the caller's role may enter `area`.
///
/// On success the parsed [`Role`] is inserted into request extensions.
///
/// # Errors
///
/// - `401 Unauthorized` if no recognizable role was supplied
/// - `403 Forbidden` if the role does not cover `area`
async fn guard(area: Area, mut req: Request, next: Next) -> Result<Response, AppError> {
    let role = caller_role(req.headers());

    match authorize(role, area) {
        Access::Granted => {}
        Access::LoginRequired => {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Missing or unrecognized X-User-Role header" }),
            ));
        }
        Access::Denied => {
            tracing::debug!(?role, ?area, "Access denied");
            return Err(AppError::forbidden(
                "Access denied",
                json!({ "role": role.map(|r| r.as_str()) }),
            ));
        }
    }

    if let Some(role) = role {
        req.extensions_mut().insert(role);
    }

    Ok(next.run(req).await)
}

/// Any signed-in caller.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/api/reviews", post(create_review_handler))
///     .route_layer(middleware::from_fn(auth::customer_layer));
/// ```
pub async fn customer_layer(req: Request, next: Next) -> Result<Response, AppError> {
    guard(Area::Customer, req, next).await
}

/// Hotel owners only.
pub async fn owner_layer(req: Request, next: Next) -> Result<Response, AppError> {
    guard(Area::Owner, req, next).await
}

/// Administrators only.
pub async fn admin_layer(req: Request, next: Next) -> Result<Response, AppError> {
    guard(Area::Admin, req, next).await
}

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use hotel_stays::routes::app_router;
use serde_json::Value;
use tower::ServiceExt;

#[tokio::test]
async fn test_missing_role_is_unauthorized() {
    let server = common::make_server();

    let response = server.get("/api/admin/reviews/count").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "unauthorized");
}

#[tokio::test]
async fn test_unknown_role_is_unauthorized() {
    let server = common::make_server();

    server
        .get("/api/admin/reviews/count")
        .add_header(common::ROLE_HEADER, "wizard")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_role_is_forbidden() {
    let server = common::make_server();

    let response = server
        .get("/api/admin/reviews/count")
        .add_header(common::ROLE_HEADER, "owner")
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "forbidden");
    assert_eq!(json["error"]["details"]["role"], "hotel_owner");
}

#[tokio::test]
async fn test_every_role_reaches_customer_area() {
    let server = common::make_server();

    for role in ["customer", "hotelier", "administrator"] {
        server
            .get("/api/users/1/reviews")
            .add_header(common::ROLE_HEADER, role)
            .await
            .assert_status_ok();
    }
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let app = app_router(common::create_test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

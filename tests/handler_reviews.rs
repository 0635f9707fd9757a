mod common;

use axum::http::StatusCode;
use hotel_stays::application::services::RatingPolicy;
use hotel_stays::config::Config;
use serde_json::{Value, json};

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_review_success() {
    let server = common::make_server();

    let json = common::create_test_review(&server, 42, 7, 5).await;

    assert_eq!(json["id"], 1);
    assert_eq!(json["hotel_id"], 42);
    assert_eq!(json["author_id"], 7);
    assert_eq!(json["rating"], 5);
    assert_eq!(json["helpful"], 0);
    assert!(json["title"].is_null());
    assert!(json.get("created_at").is_some());
}

#[tokio::test]
async fn test_create_review_with_title() {
    let server = common::make_server();

    let response = server
        .post("/api/reviews")
        .add_header(common::ROLE_HEADER, "guest")
        .json(&json!({
            "hotel_id": 1,
            "author_id": 2,
            "rating": 4,
            "title": "Lovely stay",
            "comment": "Quiet at night"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["title"], "Lovely stay");
}

#[tokio::test]
async fn test_create_review_rating_out_of_range_rejected() {
    let server = common::make_server();

    let response = server
        .post("/api/reviews")
        .add_header(common::ROLE_HEADER, "customer")
        .json(&json!({ "hotel_id": 1, "author_id": 2, "rating": 6, "comment": "" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["rating"], 6);
}

#[tokio::test]
async fn test_create_review_rating_clamped_under_clamp_policy() {
    let server = common::make_server_with(Config {
        rating_policy: RatingPolicy::Clamp,
        ..Config::default()
    });

    let response = server
        .post("/api/reviews")
        .add_header(common::ROLE_HEADER, "customer")
        .json(&json!({ "hotel_id": 1, "author_id": 2, "rating": 0, "comment": "" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["rating"], 1);
}

#[tokio::test]
async fn test_create_review_invalid_ids() {
    let server = common::make_server();

    let response = server
        .post("/api/reviews")
        .add_header(common::ROLE_HEADER, "customer")
        .json(&json!({ "hotel_id": 0, "author_id": 2, "rating": 3, "comment": "" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_review_mistyped_body() {
    let server = common::make_server();

    let response = server
        .post("/api/reviews")
        .add_header(common::ROLE_HEADER, "customer")
        .json(&json!({ "hotel_id": 1, "author_id": 2, "rating": 4.5, "comment": "" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Invalid JSON body");
    assert!(json["error"]["details"]["reason"].is_string());
}

#[tokio::test]
async fn test_create_review_malformed_json() {
    let server = common::make_server();

    let response = server
        .post("/api/reviews")
        .add_header(common::ROLE_HEADER, "customer")
        .text("{ not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

// ─── GET ONE ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_review_success() {
    let server = common::make_server();
    let created = common::create_test_review(&server, 12, 4, 3).await;

    let response = server
        .get(&format!("/api/reviews/{}", created["id"]))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), created);
}

#[tokio::test]
async fn test_get_review_reflects_helpful_votes() {
    let server = common::make_server();
    let created = common::create_test_review(&server, 12, 4, 3).await;
    let path = format!("/api/reviews/{}", created["id"]);

    server
        .post(&format!("{path}/helpful"))
        .add_header(common::ROLE_HEADER, "customer")
        .await
        .assert_status_ok();

    let json = server.get(&path).await.json::<Value>();
    assert_eq!(json["helpful"], 1);
}

#[tokio::test]
async fn test_get_review_not_found() {
    let server = common::make_server();

    let response = server.get("/api/reviews/31337").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

// ─── RATING ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_hotel_rating_aggregates_reviews() {
    let server = common::make_server();
    common::create_test_review(&server, 7, 1, 5).await;
    common::create_test_review(&server, 7, 2, 5).await;
    common::create_test_review(&server, 7, 3, 4).await;
    common::create_test_review(&server, 8, 3, 1).await;

    let response = server.get("/api/hotels/7/rating").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["hotel_id"], 7);
    assert_eq!(json["rating"]["display_score"], 9.3);
    assert_eq!(json["rating"]["average_stars"], 4.67);
    assert_eq!(json["rating"]["label"], "Excellent");
    assert_eq!(json["rating"]["count"], 3);
}

#[tokio::test]
async fn test_hotel_rating_average_label() {
    let server = common::make_server();
    for (author, stars) in [(1, 3), (2, 3), (3, 2), (4, 2)] {
        common::create_test_review(&server, 9, author, stars).await;
    }

    let json = server.get("/api/hotels/9/rating").await.json::<Value>();

    assert_eq!(json["rating"]["display_score"], 5.0);
    assert_eq!(json["rating"]["label"], "Average");
}

#[tokio::test]
async fn test_hotel_rating_null_without_reviews() {
    let server = common::make_server();

    let response = server.get("/api/hotels/404/rating").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert!(json["rating"].is_null());
}

#[tokio::test]
async fn test_hotel_rating_is_public() {
    let server = common::make_server();

    server.get("/api/hotels/1/rating").await.assert_status_ok();
    server.get("/api/hotels/1/reviews").await.assert_status_ok();
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_hotel_reviews_list_paginated() {
    let server = common::make_server();
    for author in 1..=5 {
        common::create_test_review(&server, 3, author, 4).await;
    }

    let response = server
        .get("/api/hotels/3/reviews")
        .add_query_param("page", 2)
        .add_query_param("page_size", 2)
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["author_id"], 3);
    assert_eq!(json["pagination"]["total_items"], 5);
    assert_eq!(json["pagination"]["total_pages"], 3);
    assert_eq!(json["pagination"]["page"], 2);
}

#[tokio::test]
async fn test_hotel_reviews_invalid_page() {
    let server = common::make_server();

    let response = server
        .get("/api/hotels/3/reviews")
        .add_query_param("page", 0)
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_user_reviews_requires_role() {
    let server = common::make_server();
    common::create_test_review(&server, 1, 77, 5).await;
    common::create_test_review(&server, 2, 77, 3).await;
    common::create_test_review(&server, 2, 78, 3).await;

    server
        .get("/api/users/77/reviews")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let response = server
        .get("/api/users/77/reviews")
        .add_header(common::ROLE_HEADER, "customer")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|r| r["author_id"] == 77));
}

// ─── HELPFUL ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_mark_helpful_increments() {
    let server = common::make_server();
    let review = common::create_test_review(&server, 1, 2, 4).await;
    let id = review["id"].as_u64().unwrap();

    for expected in 1..=2 {
        let response = server
            .post(&format!("/api/reviews/{id}/helpful"))
            .add_header(common::ROLE_HEADER, "customer")
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["helpful"], expected);
    }
}

#[tokio::test]
async fn test_mark_helpful_does_not_change_rating() {
    let server = common::make_server();
    let review = common::create_test_review(&server, 5, 2, 4).await;
    let before = server.get("/api/hotels/5/rating").await.json::<Value>();

    server
        .post(&format!("/api/reviews/{}/helpful", review["id"]))
        .add_header(common::ROLE_HEADER, "customer")
        .await
        .assert_status_ok();

    let after = server.get("/api/hotels/5/rating").await.json::<Value>();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_mark_helpful_not_found() {
    let server = common::make_server();

    let response = server
        .post("/api/reviews/999/helpful")
        .add_header(common::ROLE_HEADER, "customer")
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

// ─── ADMIN ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_review_count_admin_only() {
    let server = common::make_server();
    common::create_test_review(&server, 1, 2, 4).await;
    common::create_test_review(&server, 1, 3, 5).await;

    server
        .get("/api/admin/reviews/count")
        .add_header(common::ROLE_HEADER, "customer")
        .await
        .assert_status(StatusCode::FORBIDDEN);

    let response = server
        .get("/api/admin/reviews/count")
        .add_header(common::ROLE_HEADER, "ROLE_SUPER_ADMIN")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["total"], 2);
}

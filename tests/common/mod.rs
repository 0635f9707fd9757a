#![allow(dead_code)]

use axum_test::TestServer;
use hotel_stays::config::Config;
use hotel_stays::routes::router;
use hotel_stays::state::AppState;
use serde_json::{Value, json};

pub const ROLE_HEADER: &str = "x-user-role";

pub fn create_test_state() -> AppState {
    AppState::from_config(&Config::default())
}

pub fn create_test_state_with(config: Config) -> AppState {
    AppState::from_config(&config)
}

/// Full router (role guards included) over a fresh in-memory store.
pub fn make_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

pub fn make_server_with(config: Config) -> TestServer {
    TestServer::new(router(create_test_state_with(config))).unwrap()
}

pub async fn create_test_review(server: &TestServer, hotel_id: i64, author_id: i64, rating: i64) -> Value {
    let response = server
        .post("/api/reviews")
        .add_header(ROLE_HEADER, "customer")
        .json(&json!({
            "hotel_id": hotel_id,
            "author_id": author_id,
            "rating": rating,
            "comment": "Clean rooms, friendly staff"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

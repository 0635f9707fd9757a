mod common;

use hotel_stays::domain::repositories::ReviewRepository;
use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::make_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["review_store"]["status"], "ok");
    assert_eq!(json["checks"]["event_channel"]["status"], "idle");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = common::make_server();

    let response = server.get("/health").await;

    let json = response.json::<Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"].get("review_store").is_some());
    assert!(json["checks"].get("event_channel").is_some());
}

#[tokio::test]
async fn test_health_reports_event_subscribers() {
    let state = common::create_test_state();
    let _rx = state.review_service.repository().subscribe();
    let server = axum_test::TestServer::new(hotel_stays::routes::router(state)).unwrap();

    let json = server.get("/health").await.json::<Value>();

    assert_eq!(json["checks"]["event_channel"]["status"], "ok");
    assert_eq!(json["checks"]["event_channel"]["message"], "1 subscriber(s)");
}

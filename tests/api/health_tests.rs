//! Health Check API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::common::TestApp;

/// Test basic health check endpoint returns 200 OK with a status field
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::seeded();

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

/// Liveness never depends on the storage backend
#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::empty();

    let response = app.server.get("/health/live").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "alive");
}

/// The in-memory backend is always ready
#[tokio::test]
async fn test_readiness_probe_in_memory() {
    let app = TestApp::seeded();

    let response = app.server.get("/health/ready").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"]["backend"], "in-memory");
    assert!(body["started_at"].as_str().is_some());
}

#[tokio::test]
async fn test_metrics_exposes_request_counters() {
    let app = TestApp::seeded();

    app.server.get("/api/jobapplications").await.assert_status_ok();
    let response = app.server.get("/metrics").await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("job_tracker_http_requests_total"));
    assert!(text.contains("/api/jobapplications"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::seeded();

    let response = app.server.get("/api/unknown").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

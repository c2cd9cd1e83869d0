//! Integration tests for the health endpoint.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_health_ok() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"], "ok");
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_reports_store_outage() {
    let app = helpers::TestApp::new();
    app.break_store();

    let response = app.get("/api/health", None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["status"], "degraded");
    assert_eq!(response.body["store"], "unavailable");
}

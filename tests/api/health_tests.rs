//! Health Check and Metrics API Tests

use serde_json::Value;

use crate::common::{ana_ruiz, create_user, test_server};

#[tokio::test]
async fn test_health_check_returns_ok() {
    let server = test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_liveness_probe() {
    let server = test_server();

    let response = server.get("/health/live").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "alive");
}

#[tokio::test]
async fn test_readiness_probe_with_memory_storage() {
    let server = test_server();

    let response = server.get("/health/ready").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["storage"]["backend"], "memory");
}

#[tokio::test]
async fn test_metrics_report_user_requests() {
    let server = test_server();
    create_user(&server, &ana_ruiz()).await;

    let response = server.get("/metrics").await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("user_service_http_requests_total"));
    assert!(text.contains("method=\"POST\""));
}

//! Integration tests for the health check and routing fallbacks.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new().await;

    for path in ["/api/nope", "/elsewhere"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert!(response.body["message"].is_string());
    }
}

#[tokio::test]
async fn test_body_limit() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let oversized = format!(r#"{{"name": "X", "bio": "{}"}}"#, "a".repeat(2 * 1024 * 1024));

    let response = app
        .raw_request("PUT", "/api/profile", &oversized, Some(&token))
        .await;

    assert!(response.status.is_client_error());
    let profile = app.request("GET", "/api/profile", None, None).await;
    assert_ne!(profile.body["name"], "X");
}

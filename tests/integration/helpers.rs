//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use chrono::{DateTime, Utc};
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use bilink_api::{AppState, build_app};
use bilink_auth::jwt::Claims;
use bilink_core::config::{AppConfig, StoreBackend};
use bilink_database::{MemoryStore, StoreManager};
use bilink_service::{Services, bootstrap};

/// Signing secret used by every test app.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Password the bootstrap gives the admin.
pub const ADMIN_PASSWORD: &str = "admin123";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application state behind the router
    pub state: AppState,
}

/// Configuration shared by the tests.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = TEST_SECRET.to_string();
    config.store.backend = StoreBackend::Memory;
    config
}

impl TestApp {
    /// Create a bootstrapped application over a fresh in-memory store
    pub async fn new() -> Self {
        Self::with_stores(StoreManager::from_memory(MemoryStore::new())).await
    }

    /// Create a bootstrapped application over the given stores
    pub async fn with_stores(stores: StoreManager) -> Self {
        let config = test_config();
        let services = Services::new(&stores, &config).expect("Failed to wire services");
        bootstrap(&services, &config)
            .await
            .expect("Failed to bootstrap store");

        let state = AppState::new(config, services);
        let router = build_app(state.clone());

        Self { router, state }
    }

    /// Login and return the session token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Login as the bootstrapped admin
    pub async fn admin_token(&self) -> String {
        self.login("admin", ADMIN_PASSWORD).await
    }

    /// Make an HTTP request with a JSON body to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.raw_request(method, path, &body_str, token).await
    }

    /// Make an HTTP request with a verbatim body to the test app
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: &str,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Sign arbitrary claims with the test secret.
pub fn forge_token(username: &str, role: &str, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> String {
    let claims = Claims {
        username: username.to_string(),
        role: role.to_string(),
        iat: issued_at.timestamp(),
        exp: expires_at.timestamp(),
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to sign token")
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

//! Integration tests for authentication and account management.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use http::StatusCode;
use serde_json::json;

use bilink_auth::PasswordHasher;
use bilink_core::config::StoreBackend;
use bilink_core::error::AppError;
use bilink_core::result::AppResult;
use bilink_core::traits::SingletonRepository;
use bilink_database::{MemoryStore, StoreManager};
use bilink_entity::admin::AdminAccount;

use crate::helpers::{ADMIN_PASSWORD, TestApp, forge_token};

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "admin", "password": ADMIN_PASSWORD})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].is_string());
    assert!(response.body["expiresAt"].is_string());
    assert_eq!(response.body["user"], json!({"username": "admin", "role": "admin"}));
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let app = TestApp::new().await;

    for body in [
        json!({"username": "admin", "password": "wrongpassword"}),
        json!({"username": "nobody", "password": ADMIN_PASSWORD}),
    ] {
        let response = app.request("POST", "/api/auth/login", Some(body), None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["message"], "Invalid username or password");
    }
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::new().await;

    for body in [json!({}), json!({"username": "admin"}), json!({"password": "x"})] {
        let response = app.request("POST", "/api/auth/login", Some(body), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(response.body["message"].is_string());
    }
}

#[tokio::test]
async fn test_login_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .raw_request("POST", "/api/auth/login", "{not json", None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["message"].is_string());
}

#[tokio::test]
async fn test_verify_round_trip() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app.request("GET", "/api/auth/verify", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["username"], "admin");
    assert_eq!(response.body["user"]["role"], "admin");
}

#[tokio::test]
async fn test_verify_rejects_missing_and_invalid_tokens() {
    let app = TestApp::new().await;

    let missing = app.request("GET", "/api/auth/verify", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request("GET", "/api/auth/verify", None, Some("not-a-token"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_verify_rejects_expired_token() {
    let app = TestApp::new().await;
    let now = Utc::now();
    let token = forge_token("admin", "admin", now - Duration::days(8), now - Duration::days(1));

    let response = app.request("GET", "/api/auth/verify", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "SESSION_EXPIRED");
}

#[tokio::test]
async fn test_non_admin_role_is_forbidden() {
    let app = TestApp::new().await;
    let now = Utc::now();
    let token = forge_token("guest", "viewer", now, now + Duration::hours(1));

    let verify = app.request("GET", "/api/auth/verify", None, Some(&token)).await;
    assert_eq!(verify.status, StatusCode::OK);

    let response = app
        .request(
            "PUT",
            "/api/auth/account",
            Some(json!({"username": "guest"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_account() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let empty = app
        .request("PUT", "/api/auth/account", Some(json!({"username": ""})), Some(&token))
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);

    let blank = app
        .request("PUT", "/api/auth/account", Some(json!({"username": "  "})), Some(&token))
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);

    let renamed = app
        .request("PUT", "/api/auth/account", Some(json!({"username": "owner"})), Some(&token))
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert!(renamed.body["message"].is_string());

    app.login("owner", ADMIN_PASSWORD).await;

    // The old token still carries the old name until it expires.
    let verify = app.request("GET", "/api/auth/verify", None, Some(&token)).await;
    assert_eq!(verify.status, StatusCode::OK);
    assert_eq!(verify.body["user"]["username"], "admin");
}

#[tokio::test]
async fn test_update_account_requires_token() {
    let app = TestApp::new().await;

    let response = app
        .request("PUT", "/api/auth/account", Some(json!({"username": "owner"})), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_password_rules() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let cases = [
        ("Ab!", "Password must be at least 8 characters long"),
        ("abcdefg!", "Password must contain at least one uppercase letter"),
        ("ABCDEFG!", "Password must contain at least one lowercase letter"),
        ("Abcdefgh", "Password must contain at least one special character"),
    ];

    for (weak, message) in cases {
        let response = app
            .request(
                "PUT",
                "/api/auth/password",
                Some(json!({"currentPassword": ADMIN_PASSWORD, "newPassword": weak})),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{weak}");
        assert_eq!(response.body["message"], message);
    }

    // Nothing changed.
    app.admin_token().await;
}

#[tokio::test]
async fn test_update_password_missing_field() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "PUT",
            "/api/auth/password",
            Some(json!({"newPassword": "Str0ng!pass"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_password_wrong_current() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "PUT",
            "/api/auth/password",
            Some(json!({"currentPassword": "not-it", "newPassword": "Str0ng!pass"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    app.admin_token().await;
}

#[tokio::test]
async fn test_update_password_success() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "PUT",
            "/api/auth/password",
            Some(json!({"currentPassword": ADMIN_PASSWORD, "newPassword": "Str0ng!pass"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    app.login("admin", "Str0ng!pass").await;
    let old = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "admin", "password": ADMIN_PASSWORD})),
            None,
        )
        .await;
    assert_eq!(old.status, StatusCode::UNAUTHORIZED);
}

/// Admin store that serves the seeded account but refuses writes.
#[derive(Debug)]
struct ReadOnlyAdminStore(Arc<MemoryStore>);

#[async_trait]
impl SingletonRepository<AdminAccount> for ReadOnlyAdminStore {
    async fn get(&self) -> AppResult<Option<AdminAccount>> {
        SingletonRepository::<AdminAccount>::get(self.0.as_ref()).await
    }

    async fn put(&self, _: &AdminAccount) -> AppResult<()> {
        Err(AppError::storage("/srv/bilink/bilink.db: database is locked"))
    }
}

#[tokio::test]
async fn test_update_account_store_failure_is_a_generic_500() {
    let memory = Arc::new(MemoryStore::new());
    let hash = PasswordHasher::new().hash_password(ADMIN_PASSWORD).unwrap();
    memory.put(&AdminAccount::new("admin", hash)).await.unwrap();

    let stores = StoreManager::from_parts(
        Arc::new(ReadOnlyAdminStore(memory.clone())),
        memory.clone(),
        StoreBackend::Memory,
    );
    let app = TestApp::with_stores(stores).await;
    let token = app.admin_token().await;

    let response = app
        .request("PUT", "/api/auth/account", Some(json!({"username": "owner"})), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "INTERNAL_ERROR");
    assert!(!response.body["message"].as_str().unwrap().contains("/srv"));

    let account = SingletonRepository::<AdminAccount>::get(memory.as_ref())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.username, "admin");
}

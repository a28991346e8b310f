//! Integration tests for the profile endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use http::StatusCode;
use serde_json::{Value, json};

use bilink_core::config::StoreBackend;
use bilink_core::error::AppError;
use bilink_core::result::AppResult;
use bilink_core::traits::SingletonRepository;
use bilink_database::{MemoryStore, StoreManager};
use bilink_entity::profile::ProfileDocument;

use crate::helpers::TestApp;

async fn current_profile(app: &TestApp) -> Value {
    let response = app.request("GET", "/api/profile", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    response.body
}

#[tokio::test]
async fn test_public_read_returns_default() {
    let app = TestApp::new().await;

    let profile = current_profile(&app).await;

    assert_eq!(profile, serde_json::to_value(ProfileDocument::default()).unwrap());
}

#[tokio::test]
async fn test_update_requires_admin_token() {
    let app = TestApp::new().await;

    let response = app
        .request("PUT", "/api/profile", Some(json!({"name": "X"})), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(current_profile(&app).await["name"], "Your Name");
}

#[tokio::test]
async fn test_name_only_update_preserves_other_fields() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let before = current_profile(&app).await;

    let response = app
        .request("PUT", "/api/profile", Some(json!({"name": "X"})), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["message"].is_string());
    assert_eq!(response.body["profile"]["name"], "X");

    let after = current_profile(&app).await;
    assert_eq!(after, response.body["profile"]);
    for key in ["title", "bio", "avatarUrl", "about", "skills", "projects", "links", "contact"] {
        assert_eq!(after[key], before[key], "{key}");
    }
}

#[tokio::test]
async fn test_empty_update_is_rejected_and_idempotent() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let before = current_profile(&app).await;

    for _ in 0..2 {
        let response = app
            .request("PUT", "/api/profile", Some(json!({})), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(current_profile(&app).await, before);
    }
}

#[tokio::test]
async fn test_invalid_bodies_are_rejected() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let before = current_profile(&app).await;

    for body in [
        json!({"name": ""}),
        json!({"name": "X", "skills": [{"name": "Go", "icon": "", "level": 101}]}),
        json!({"name": "X", "links": [{"type": "myspace", "label": "", "url": ""}]}),
        json!(["name", "X"]),
    ] {
        let response = app
            .request("PUT", "/api/profile", Some(body.clone()), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
    }

    let malformed = app
        .raw_request("PUT", "/api/profile", "{\"name\":", Some(&token))
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);

    assert_eq!(current_profile(&app).await, before);
}

#[tokio::test]
async fn test_supplied_keys_are_stored_verbatim() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let partial = json!({
        "name": "Ada",
        "bio": "Engines",
        "skills": [{"name": "Rust", "icon": "🦀", "level": 95}],
        "contact": {"email": "ada@example.com", "location": "London"}
    });

    let response = app
        .request("PUT", "/api/profile", Some(partial.clone()), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let after = current_profile(&app).await;
    for (key, value) in partial.as_object().unwrap() {
        assert_eq!(&after[key], value, "{key}");
    }
}

#[tokio::test]
async fn test_disjoint_updates_accumulate() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    for body in [
        json!({"name": "A", "bio": "first"}),
        json!({"name": "A", "title": "second"}),
    ] {
        let response = app.request("PUT", "/api/profile", Some(body), Some(&token)).await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let after = current_profile(&app).await;
    assert_eq!(after["bio"], "first");
    assert_eq!(after["title"], "second");
}

#[tokio::test]
async fn test_contact_is_replaced_wholesale() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "PUT",
            "/api/profile",
            Some(json!({"name": "X", "contact": {"email": "new@example.com"}})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let after = current_profile(&app).await;
    assert_eq!(after["contact"], json!({"email": "new@example.com", "location": ""}));
}

/// Profile store that serves the default document but refuses writes.
#[derive(Debug)]
struct ReadOnlyProfileStore;

#[async_trait]
impl SingletonRepository<ProfileDocument> for ReadOnlyProfileStore {
    async fn get(&self) -> AppResult<Option<ProfileDocument>> {
        Ok(Some(ProfileDocument::default()))
    }

    async fn put(&self, _: &ProfileDocument) -> AppResult<()> {
        Err(AppError::storage("/srv/bilink/data.json: permission denied"))
    }
}

#[tokio::test]
async fn test_store_failure_is_a_generic_500() {
    let memory = Arc::new(MemoryStore::new());
    let stores = StoreManager::from_parts(memory, Arc::new(ReadOnlyProfileStore), StoreBackend::Memory);
    let app = TestApp::with_stores(stores).await;
    let token = app.admin_token().await;

    let response = app
        .request("PUT", "/api/profile", Some(json!({"name": "X"})), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "INTERNAL_ERROR");
    assert!(!response.body["message"].as_str().unwrap().contains("/srv"));
    assert_eq!(current_profile(&app).await["name"], "Your Name");
}

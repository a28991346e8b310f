//! Route definitions for the Bilink HTTP API.
//!
//! All routes are mounted under `/api`. Anything else falls through to a
//! JSON 404.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Auth endpoints: login, verify, account, password
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/verify", get(handlers::auth::verify))
        .route("/auth/account", put(handlers::auth::update_account))
        .route("/auth/password", put(handlers::auth::update_password))
}

/// Profile endpoints: public read, admin update
fn profile_routes() -> Router<AppState> {
    Router::new().route(
        "/profile",
        get(handlers::profile::get_profile).put(handlers::profile::update_profile),
    )
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

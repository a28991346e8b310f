//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use bilink_core::config::AppConfig;
use bilink_service::{AuthService, ProfileService, Services};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Authentication and account service
    pub auth: Arc<AuthService>,
    /// Profile document service
    pub profile: Arc<ProfileService>,
}

impl AppState {
    /// Creates the state from configuration and wired services.
    pub fn new(config: AppConfig, services: Services) -> Self {
        Self {
            config: Arc::new(config),
            auth: services.auth,
            profile: services.profile,
        }
    }
}

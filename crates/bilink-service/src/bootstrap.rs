//! Service wiring and first-start seeding.

use std::sync::Arc;

use tracing::{info, warn};

use bilink_core::config::AppConfig;
use bilink_core::error::AppError;
use bilink_database::StoreManager;

use crate::auth::AuthService;
use crate::profile::ProfileService;

/// The services built over one set of stores.
#[derive(Debug, Clone)]
pub struct Services {
    /// Authentication and account service.
    pub auth: Arc<AuthService>,
    /// Profile document service.
    pub profile: Arc<ProfileService>,
}

impl Services {
    /// Wires services over the given stores.
    pub fn new(stores: &StoreManager, config: &AppConfig) -> Result<Self, AppError> {
        Ok(Self {
            auth: Arc::new(AuthService::new(stores.admin.clone(), &config.auth)?),
            profile: Arc::new(ProfileService::new(stores.profile.clone())),
        })
    }
}

/// Seeds a fresh store with the admin account and the default profile.
///
/// Existing records are left untouched.
pub async fn bootstrap(services: &Services, config: &AppConfig) -> Result<(), AppError> {
    if config.auth.uses_default_secret() {
        warn!("auth.jwt_secret is the built-in placeholder; set JWT_SECRET in production");
    }

    let created_admin = services.auth.ensure_admin(&config.admin).await?;
    let created_profile = services.profile.ensure_profile().await?;

    info!(
        created_admin = created_admin,
        created_profile = created_profile,
        "Store bootstrap complete"
    );
    Ok(())
}

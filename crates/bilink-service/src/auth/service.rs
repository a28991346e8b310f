//! Login, token verification, and admin account updates.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use bilink_auth::jwt::{Identity, JwtDecoder, JwtEncoder};
use bilink_auth::password::{PasswordHasher, PasswordValidator};
use bilink_auth::rbac;
use bilink_core::config::{AdminConfig, AuthConfig};
use bilink_core::error::AppError;
use bilink_database::manager::AdminStore;
use bilink_entity::admin::{AdminAccount, Role};

/// Message for every credential mismatch, so callers cannot tell which part was wrong.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Signed session token.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
    /// The identity embedded in the token.
    pub user: Identity,
}

/// Handles authentication and admin account operations.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Admin account store.
    store: AdminStore,
    /// JWT token encoder.
    encoder: Arc<JwtEncoder>,
    /// JWT token decoder.
    decoder: Arc<JwtDecoder>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(store: AdminStore, config: &AuthConfig) -> Result<Self, AppError> {
        Ok(Self {
            store,
            encoder: Arc::new(JwtEncoder::new(config)?),
            decoder: Arc::new(JwtDecoder::new(config)),
            hasher: Arc::new(PasswordHasher::new()),
            validator: Arc::new(PasswordValidator::new(config)),
        })
    }

    /// Authenticates the admin and issues a session token.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let account = match self.store.get().await? {
            Some(account) if account.username == username => account,
            _ => {
                warn!(username = %username, "Login rejected: unknown username");
                return Err(AppError::authentication(INVALID_CREDENTIALS));
            }
        };

        if !self.verify_hash(password, &account.password_hash).await? {
            warn!(username = %username, "Login rejected: wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        if self.hasher.needs_rehash(&account.password_hash) {
            self.upgrade_hash(account.clone(), password).await;
        }

        let issued = self.encoder.issue(&account.username, account.role)?;

        info!(username = %account.username, "Admin logged in");

        Ok(LoginOutcome {
            token: issued.token,
            expires_at: issued.expires_at,
            user: Identity {
                username: account.username,
                role: account.role.as_str().to_string(),
            },
        })
    }

    /// Validates a session token and returns the identity it carries.
    pub fn verify(&self, token: &str) -> Result<Identity, AppError> {
        self.verify_at(token, Utc::now())
    }

    /// Validates a session token as if the current time were `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Identity, AppError> {
        self.decoder.decode_at(token, now).map(Identity::from)
    }

    /// Checks that the identity carries the required role.
    pub fn require_role(&self, identity: &Identity, role: Role) -> Result<(), AppError> {
        rbac::require_role(identity, role)
    }

    /// Returns the stored admin account.
    pub async fn account(&self) -> Result<AdminAccount, AppError> {
        self.store
            .get()
            .await?
            .ok_or_else(|| AppError::not_found("Admin account not found"))
    }

    /// Changes the admin password after checking the current one.
    ///
    /// The stored hash is untouched unless every check passes.
    pub async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        self.validator.validate(new_password)?;

        let account = self.account().await?;
        if !self.verify_hash(current_password, &account.password_hash).await? {
            warn!(username = %account.username, "Password change rejected: wrong current password");
            return Err(AppError::authentication("Current password is incorrect"));
        }

        self.store_password(account, new_password).await
    }

    /// Sets a new admin password without knowing the current one.
    ///
    /// Operator path used by the CLI; the password policy still applies.
    pub async fn reset_password(&self, new_password: &str) -> Result<(), AppError> {
        self.validator.validate(new_password)?;
        let account = self.account().await?;
        self.store_password(account, new_password).await
    }

    /// Renames the admin account.
    ///
    /// Tokens issued under the old name stay valid until they expire.
    pub async fn update_username(&self, username: &str) -> Result<(), AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::validation("Username cannot be empty"));
        }

        let mut account = self.account().await?;
        let previous = std::mem::replace(&mut account.username, username.to_string());
        account.touch();
        self.store.put(&account).await?;

        info!(from = %previous, to = %username, "Admin username changed");
        Ok(())
    }

    /// Creates the admin account from configuration if the store has none.
    ///
    /// Returns `true` when an account was created.
    pub async fn ensure_admin(&self, config: &AdminConfig) -> Result<bool, AppError> {
        if self.store.get().await?.is_some() {
            return Ok(false);
        }

        let username = config.username.trim();
        if username.is_empty() {
            return Err(AppError::configuration("admin.username must not be empty"));
        }

        let hash = self.hash(&config.password).await?;
        self.store.put(&AdminAccount::new(username, hash)).await?;

        info!(username = %username, "Created admin account");
        if config.uses_default_password() {
            warn!("Admin account uses the default password; change it after the first login");
        }
        Ok(true)
    }

    async fn store_password(
        &self,
        mut account: AdminAccount,
        new_password: &str,
    ) -> Result<(), AppError> {
        account.password_hash = self.hash(new_password).await?;
        account.touch();
        self.store.put(&account).await?;

        info!(username = %account.username, "Admin password changed");
        Ok(())
    }

    /// Replaces a legacy hash after a successful login. Failures only cost
    /// the upgrade, never the login.
    async fn upgrade_hash(&self, mut account: AdminAccount, password: &str) {
        let result = async {
            account.password_hash = self.hash(password).await?;
            self.store.put(&account).await
        }
        .await;

        match result {
            Ok(()) => info!(username = %account.username, "Upgraded legacy password hash"),
            Err(e) => warn!(username = %account.username, error = %e, "Failed to upgrade legacy password hash"),
        }
    }

    async fn hash(&self, password: &str) -> Result<String, AppError> {
        let hasher = self.hasher.clone();
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
    }

    async fn verify_hash(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let hasher = self.hasher.clone();
        let password = password.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
    }
}

//! Admin account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::Role;

/// The single privileged identity of a deployment.
///
/// Data files written by older releases stored the hash under `password`
/// and carried no id or timestamps; those fields default on load.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminAccount {
    /// Account identifier.
    #[serde(default)]
    pub id: Uuid,
    /// Login name.
    pub username: String,
    /// Password hash (Argon2 PHC string, or bcrypt for legacy data).
    #[serde(alias = "password")]
    pub password_hash: String,
    /// Always [`Role::Admin`].
    #[serde(default)]
    pub role: Role,
    /// When the account was created.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    /// When the account was last modified.
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl AdminAccount {
    /// Create a new admin account with a freshly generated id.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password_hash: password_hash.into(),
            role: Role::Admin,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the account as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

//! Initial admin account configuration.

use serde::{Deserialize, Serialize};

/// Password given to the bootstrap admin when none is configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Credentials used to create the admin account on first startup.
///
/// Ignored once an admin account exists in the store.
#[derive(Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Bootstrap username.
    #[serde(default = "default_username")]
    pub username: String,
    /// Bootstrap plaintext password.
    #[serde(default = "default_password")]
    pub password: String,
}

impl AdminConfig {
    /// Whether the bootstrap password is the built-in default.
    pub fn uses_default_password(&self) -> bool {
        self.password == DEFAULT_ADMIN_PASSWORD
    }
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    DEFAULT_ADMIN_PASSWORD.to_string()
}

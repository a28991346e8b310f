//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod admin;
pub mod app;
pub mod auth;
pub mod logging;
pub mod store;

use std::path::Path;

use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::{Deserialize, Serialize};

pub use self::admin::AdminConfig;
pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::logging::LoggingConfig;
pub use self::store::{JsonStoreConfig, SqliteConfig, StoreBackend, StoreConfig};

use crate::error::AppError;

/// Directory holding `default.toml` and the per-environment overlays.
const CONFIG_DIR: &str = "config";

/// Prefix of structured environment overrides (`BILINK__AUTH__JWT_SECRET`).
const ENV_PREFIX: &str = "BILINK";

/// Plain environment variables honoured for compatibility with existing
/// deployments, mapped to their configuration keys.
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("JWT_SECRET", "auth.jwt_secret"),
    ("ADMIN_USERNAME", "admin.username"),
    ("ADMIN_PASSWORD", "admin.password"),
];

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Token and password policy settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Bootstrap admin credentials.
    #[serde(default)]
    pub admin: AdminConfig,
    /// Persistence backend settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default.toml`, the `config/{env}.toml` overlay,
    /// `BILINK__*` environment variables, and the plain `PORT`,
    /// `JWT_SECRET`, `ADMIN_USERNAME`, `ADMIN_PASSWORD` variables.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::finish(layered(Path::new(CONFIG_DIR), env), |key| {
            std::env::var(key).ok()
        })
    }

    /// Load configuration from a single explicit file plus environment overrides.
    pub fn load_file(path: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder().add_source(config::File::with_name(path));

        Self::finish(builder, |key| std::env::var(key).ok())
    }

    fn finish<F>(builder: ConfigBuilder<DefaultState>, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config = apply_legacy_env(builder, lookup)?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

/// `{dir}/default.toml` overlaid by `{dir}/{env}.toml`; both optional.
fn layered(dir: &Path, env: &str) -> ConfigBuilder<DefaultState> {
    config::Config::builder()
        .add_source(config::File::from(dir.join("default.toml")).required(false))
        .add_source(config::File::from(dir.join(format!("{env}.toml"))).required(false))
}

/// Layer the plain legacy variables on top of everything else.
fn apply_legacy_env<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    for (var, key) in LEGACY_ENV_KEYS {
        builder = builder.set_override_option(*key, lookup(var).filter(|v| !v.is_empty()))?;
    }

    let port = match lookup("PORT").filter(|v| !v.is_empty()) {
        Some(raw) => Some(
            raw.parse::<u16>()
                .map_err(|_| AppError::configuration(format!("Invalid PORT value: '{raw}'")))?
                as i64,
        ),
        None => None,
    };
    builder = builder.set_override_option("server.port", port)?;

    Ok(builder)
}

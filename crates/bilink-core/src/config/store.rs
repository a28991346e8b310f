//! Credential store configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Persistence medium for the admin account and profile document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// SQLite database via sqlx.
    #[default]
    Sqlite,
    /// A single JSON file holding both records.
    Json,
    /// Process memory; nothing survives a restart.
    Memory,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Json => write!(f, "json"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Top-level store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Which backend to use.
    #[serde(default)]
    pub backend: StoreBackend,
    /// SQLite settings, used when `backend = "sqlite"`.
    #[serde(default)]
    pub sqlite: SqliteConfig,
    /// JSON file settings, used when `backend = "json"`.
    #[serde(default)]
    pub json: JsonStoreConfig,
}

/// SQLite connection pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteConfig {
    /// sqlx connection URL.
    #[serde(default = "default_sqlite_url")]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection acquire timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            url: default_sqlite_url(),
            max_connections: default_max_connections(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

/// JSON file store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonStoreConfig {
    /// Path of the data file.
    #[serde(default = "default_json_path")]
    pub path: String,
}

impl Default for JsonStoreConfig {
    fn default() -> Self {
        Self {
            path: default_json_path(),
        }
    }
}

fn default_sqlite_url() -> String {
    "sqlite://data/bilink.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_json_path() -> String {
    "data/data.json".to_string()
}

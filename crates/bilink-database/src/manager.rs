//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use tracing::info;

use bilink_core::config::{StoreBackend, StoreConfig};
use bilink_core::result::AppResult;
use bilink_core::traits::SingletonRepository;
use bilink_entity::admin::AdminAccount;
use bilink_entity::profile::ProfileDocument;

use crate::connection::DatabasePool;
use crate::json_file::JsonFileStore;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{AdminRepository, ProfileRepository};

/// Shared handle to the admin account store.
pub type AdminStore = Arc<dyn SingletonRepository<AdminAccount>>;

/// Shared handle to the profile document store.
pub type ProfileStore = Arc<dyn SingletonRepository<ProfileDocument>>;

/// Holds the two record stores of the selected backend.
///
/// The backend is selected at construction time based on configuration;
/// services only see the trait objects.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// Admin account store.
    pub admin: AdminStore,
    /// Profile document store.
    pub profile: ProfileStore,
    /// Which backend is in use.
    pub backend: StoreBackend,
}

impl StoreManager {
    /// Open the configured backend, running migrations for SQLite.
    pub async fn new(config: &StoreConfig) -> AppResult<Self> {
        match config.backend {
            StoreBackend::Sqlite => {
                info!("Initializing SQLite store");
                let db = DatabasePool::connect(&config.sqlite).await?;
                run_migrations(db.pool()).await?;
                Ok(Self::from_pool(db))
            }
            StoreBackend::Json => {
                info!(path = %config.json.path, "Initializing JSON file store");
                Ok(Self::from_json_file(JsonFileStore::new(&config.json.path)))
            }
            StoreBackend::Memory => {
                info!("Initializing in-memory store");
                Ok(Self::from_memory(MemoryStore::new()))
            }
        }
    }

    /// Build SQL-backed stores over an existing pool.
    pub fn from_pool(db: DatabasePool) -> Self {
        let pool = db.into_pool();
        Self {
            admin: Arc::new(AdminRepository::new(pool.clone())),
            profile: Arc::new(ProfileRepository::new(pool)),
            backend: StoreBackend::Sqlite,
        }
    }

    /// Build stores sharing one JSON file.
    pub fn from_json_file(store: JsonFileStore) -> Self {
        let store = Arc::new(store);
        Self {
            admin: store.clone(),
            profile: store,
            backend: StoreBackend::Json,
        }
    }

    /// Build stores over process memory.
    pub fn from_memory(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        Self {
            admin: store.clone(),
            profile: store,
            backend: StoreBackend::Memory,
        }
    }

    /// Build from arbitrary store implementations (for testing).
    pub fn from_parts(admin: AdminStore, profile: ProfileStore, backend: StoreBackend) -> Self {
        Self {
            admin,
            profile,
            backend,
        }
    }
}

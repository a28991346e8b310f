//! In-memory store for tests and throwaway demos.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use bilink_core::result::AppResult;
use bilink_core::traits::SingletonRepository;
use bilink_entity::admin::AdminAccount;
use bilink_entity::profile::ProfileDocument;

/// Process-local store. Contents are lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    admin: Arc<RwLock<Option<AdminAccount>>>,
    profile: Arc<RwLock<Option<ProfileDocument>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SingletonRepository<AdminAccount> for MemoryStore {
    async fn get(&self) -> AppResult<Option<AdminAccount>> {
        Ok(self.admin.read().await.clone())
    }

    async fn put(&self, account: &AdminAccount) -> AppResult<()> {
        *self.admin.write().await = Some(account.clone());
        Ok(())
    }
}

#[async_trait]
impl SingletonRepository<ProfileDocument> for MemoryStore {
    async fn get(&self) -> AppResult<Option<ProfileDocument>> {
        Ok(self.profile.read().await.clone())
    }

    async fn put(&self, profile: &ProfileDocument) -> AppResult<()> {
        *self.profile.write().await = Some(profile.clone());
        Ok(())
    }
}

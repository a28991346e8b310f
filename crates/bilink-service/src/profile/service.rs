//! Public profile reads and admin-only updates.

use serde_json::{Map, Value};
use tracing::{error, info};

use bilink_core::error::AppError;
use bilink_database::manager::ProfileStore;
use bilink_entity::profile::ProfileDocument;

use super::merge::shallow_merge;

/// Handles the profile document.
#[derive(Debug, Clone)]
pub struct ProfileService {
    /// Profile document store.
    store: ProfileStore,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }

    /// Returns the stored profile, or the built-in default when none is
    /// stored or the store cannot be read.
    pub async fn get_profile(&self) -> ProfileDocument {
        match self.store.get().await {
            Ok(Some(profile)) => profile,
            Ok(None) => ProfileDocument::default(),
            Err(e) => {
                error!(error = %e, "Failed to read profile, serving default");
                ProfileDocument::default()
            }
        }
    }

    /// Shallow-merges `partial` into the stored profile and persists it.
    ///
    /// Nothing is written if the merged document is invalid.
    pub async fn update_profile(
        &self,
        partial: &Map<String, Value>,
    ) -> Result<ProfileDocument, AppError> {
        let current = self.store.get().await?.unwrap_or_default();
        let merged = shallow_merge(&current, partial)?;

        self.store.put(&merged).await?;

        let keys: Vec<&str> = partial.keys().map(String::as_str).collect();
        info!(keys = ?keys, "Profile updated");
        Ok(merged)
    }

    /// Replaces the stored profile with a complete document.
    pub async fn replace_profile(
        &self,
        mut profile: ProfileDocument,
    ) -> Result<ProfileDocument, AppError> {
        profile.normalize();
        profile.validate()?;
        self.store.put(&profile).await?;

        info!(name = %profile.name, "Profile replaced");
        Ok(profile)
    }

    /// Stores the built-in default profile if the store has none.
    ///
    /// Returns `true` when the default was written.
    pub async fn ensure_profile(&self) -> Result<bool, AppError> {
        if self.store.get().await?.is_some() {
            return Ok(false);
        }

        self.store.put(&ProfileDocument::default()).await?;
        info!("Stored default profile");
        Ok(true)
    }
}

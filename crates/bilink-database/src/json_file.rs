//! Flat JSON file store.
//!
//! Both records live in one file shaped `{ "admin": …, "profile": … }`,
//! the layout used by earlier file-based deployments. Each write goes to a
//! sibling temp file which is then renamed over the original, so readers
//! never observe a half-written document.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use bilink_core::error::{AppError, ErrorKind};
use bilink_core::result::AppResult;
use bilink_core::traits::SingletonRepository;
use bilink_entity::admin::AdminAccount;
use bilink_entity::profile::ProfileDocument;

/// On-disk layout of the data file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct DataFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    admin: Option<AdminAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile: Option<ProfileDocument>,
}

/// Store persisting both records into a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Path of the data file.
    path: PathBuf,
    /// Serializes read-modify-write cycles on the shared file.
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    /// Create a store for the given file. Nothing is touched on disk until
    /// the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> AppResult<DataFile> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(DataFile::default()),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read data file '{}'", self.path.display()),
                    e,
                ));
            }
        };

        serde_json::from_slice(&raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Data file '{}' is not valid JSON", self.path.display()),
                e,
            )
        })
    }

    async fn save(&self, data: &DataFile) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let body = serde_json::to_vec_pretty(data)?;
        let tmp = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp, body).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write data file '{}'", tmp.display()),
                e,
            )
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to replace data file '{}'", self.path.display()),
                e,
            )
        })?;

        debug!(path = %self.path.display(), "Data file written");
        Ok(())
    }

    async fn update<F>(&self, apply: F) -> AppResult<()>
    where
        F: FnOnce(&mut DataFile) + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut data = self.load().await?;
        apply(&mut data);
        self.save(&data).await
    }
}

#[async_trait]
impl SingletonRepository<AdminAccount> for JsonFileStore {
    async fn get(&self) -> AppResult<Option<AdminAccount>> {
        Ok(self.load().await?.admin)
    }

    async fn put(&self, account: &AdminAccount) -> AppResult<()> {
        let account = account.clone();
        self.update(move |data| data.admin = Some(account)).await
    }
}

#[async_trait]
impl SingletonRepository<ProfileDocument> for JsonFileStore {
    async fn get(&self) -> AppResult<Option<ProfileDocument>> {
        Ok(self.load().await?.profile)
    }

    async fn put(&self, profile: &ProfileDocument) -> AppResult<()> {
        let profile = profile.clone();
        self.update(move |data| data.profile = Some(profile)).await
    }
}

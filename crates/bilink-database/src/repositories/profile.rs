//! Profile document repository backed by the `documents` key/value table.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use bilink_core::error::{AppError, ErrorKind};
use bilink_core::result::AppResult;
use bilink_core::traits::SingletonRepository;
use bilink_entity::profile::ProfileDocument;

/// Key under which the profile is stored.
const PROFILE_KEY: &str = "profile";

/// Repository storing the profile as serialized JSON in a single row.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SingletonRepository<ProfileDocument> for ProfileRepository {
    async fn get(&self) -> AppResult<Option<ProfileDocument>> {
        let content: Option<String> =
            sqlx::query_scalar("SELECT content FROM documents WHERE key = ?1")
                .bind(PROFILE_KEY)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to load profile", e)
                })?;

        content
            .map(|raw| serde_json::from_str(&raw).map_err(AppError::from))
            .transpose()
    }

    async fn put(&self, profile: &ProfileDocument) -> AppResult<()> {
        let content = serde_json::to_string(profile)?;

        sqlx::query(
            "INSERT INTO documents (key, content, updated_at) VALUES (?1, ?2, ?3) \
             ON CONFLICT (key) DO UPDATE SET \
                content = excluded.content, \
                updated_at = excluded.updated_at",
        )
        .bind(PROFILE_KEY)
        .bind(content)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save profile", e))?;

        Ok(())
    }
}

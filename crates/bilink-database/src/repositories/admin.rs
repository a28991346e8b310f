//! Admin account repository backed by the `admins` table.

use async_trait::async_trait;
use sqlx::SqlitePool;

use bilink_core::error::{AppError, ErrorKind};
use bilink_core::result::AppResult;
use bilink_core::traits::SingletonRepository;
use bilink_entity::admin::{AdminAccount, Role};

/// Repository for the single admin row.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: SqlitePool,
}

impl AdminRepository {
    /// Create a new admin repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SingletonRepository<AdminAccount> for AdminRepository {
    async fn get(&self) -> AppResult<Option<AdminAccount>> {
        sqlx::query_as::<_, AdminAccount>(
            "SELECT id, username, password_hash, role, created_at, updated_at \
             FROM admins WHERE role = ?1 ORDER BY created_at ASC LIMIT 1",
        )
        .bind(Role::Admin)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load admin account", e))
    }

    async fn put(&self, account: &AdminAccount) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO admins (id, username, password_hash, role, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
             ON CONFLICT (id) DO UPDATE SET \
                username = excluded.username, \
                password_hash = excluded.password_hash, \
                role = excluded.role, \
                updated_at = excluded.updated_at",
        )
        .bind(account.id)
        .bind(&account.username)
        .bind(&account.password_hash)
        .bind(account.role)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save admin account", e))?;

        Ok(())
    }
}

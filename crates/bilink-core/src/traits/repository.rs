//! Single-record repository trait shared by every store backend.

use async_trait::async_trait;

use crate::result::AppResult;

/// A repository holding at most one instance of `Entity` under a
/// well-known key.
///
/// Implementations are last-write-wins: `put` replaces the stored value
/// atomically and performs no conflict detection. Services depend on this
/// trait only, so the persistence medium can be swapped without touching
/// business logic.
#[async_trait]
pub trait SingletonRepository<Entity>: Send + Sync + std::fmt::Debug + 'static
where
    Entity: Send + Sync + 'static,
{
    /// Load the stored entity, or `None` if nothing was ever persisted.
    async fn get(&self) -> AppResult<Option<Entity>>;

    /// Replace the stored entity.
    async fn put(&self, entity: &Entity) -> AppResult<()>;
}

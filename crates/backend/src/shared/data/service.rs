use async_trait::async_trait;
use contracts::shared::{DataError, ListPage, ListQuery};

use super::record::ManagedRecord;

/// Data-service boundary of a management screen.
///
/// The in-memory [`MemoryStore`](super::memory::MemoryStore) is the local
/// implementation; a remote-backed client substitutes behind the same trait
/// without touching the query pipeline or the dialog orchestration. The
/// async signatures exist for that substitution — the local store never
/// suspends.
#[async_trait]
pub trait RecordService<R: ManagedRecord>: Send + Sync {
    /// Fetch the collection. `total_count` is reported independent of any
    /// pagination the caller applies afterwards.
    async fn list(&self, query: ListQuery) -> Result<ListPage<R>, DataError>;

    /// Fetch one record, `None` if absent
    async fn get_by_id(&self, id: R::Id) -> Result<Option<R>, DataError>;

    /// Create a record from a draft; fails with [`DataError::Validation`]
    async fn create(&self, draft: R::Draft) -> Result<R, DataError>;

    /// Patch an existing record; fails with [`DataError::NotFound`]
    async fn update(&self, id: R::Id, patch: R::Draft) -> Result<R, DataError>;

    /// Remove a record; fails with [`DataError::NotFound`]
    async fn remove(&self, id: R::Id) -> Result<(), DataError>;
}

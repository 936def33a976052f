use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use contracts::domain::common::RecordId;
use contracts::shared::{DataError, ListPage, ListQuery};

use super::record::ManagedRecord;
use super::service::RecordService;

/// In-memory Collection Store.
///
/// Sole owner of the canonical record list of one management screen. The
/// list is kept newest-first: `create` prepends, `update` replaces in place
/// preserving position, `remove` deletes outright (no soft-delete, no
/// cascade). Identity and timestamp invariants are enforced here; field
/// validation is delegated to the aggregate.
pub struct MemoryStore<R: ManagedRecord> {
    records: RwLock<Vec<R>>,
}

impl<R: ManagedRecord> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    // A poisoned lock only means a panic elsewhere mid-read; the data is
    // still consistent, every mutation happens under a single write guard.
    fn read_guard(&self) -> RwLockReadGuard<'_, Vec<R>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Vec<R>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl<R: ManagedRecord> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: ManagedRecord> RecordService<R> for MemoryStore<R> {
    async fn list(&self, query: ListQuery) -> Result<ListPage<R>, DataError> {
        let records = self.read_guard();
        let matching: Vec<R> = match query.search_term.as_deref() {
            Some(term) if !term.trim().is_empty() => records
                .iter()
                .filter(|r| r.matches_search(term))
                .cloned()
                .collect(),
            _ => records.iter().cloned().collect(),
        };
        let total_count = matching.len();
        Ok(ListPage {
            records: matching,
            total_count,
        })
    }

    async fn get_by_id(&self, id: R::Id) -> Result<Option<R>, DataError> {
        Ok(self.read_guard().iter().find(|r| r.id() == id).cloned())
    }

    async fn create(&self, draft: R::Draft) -> Result<R, DataError> {
        let mut records = self.write_guard();
        let id = R::allocate_id(&records);
        let mut record = R::from_draft(id, &draft);
        record.validate().map_err(DataError::Validation)?;
        record.before_write();
        tracing::debug!(
            entity = %R::full_name(),
            id = %record.id().as_string(),
            "record created"
        );
        records.insert(0, record.clone());
        Ok(record)
    }

    async fn update(&self, id: R::Id, patch: R::Draft) -> Result<R, DataError> {
        let mut records = self.write_guard();
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| DataError::not_found(R::element_name(), id.as_string()))?;

        // Merge onto a copy so a failed validation leaves the stored record
        // untouched. The draft cannot carry identity; created_at rides along
        // from the stored record.
        let mut updated = slot.clone();
        updated.apply_draft(&patch);
        debug_assert!(updated.id() == id);
        updated.validate().map_err(DataError::Validation)?;
        updated.before_write();

        *slot = updated.clone();
        tracing::debug!(
            entity = %R::full_name(),
            id = %id.as_string(),
            "record updated"
        );
        Ok(updated)
    }

    async fn remove(&self, id: R::Id) -> Result<(), DataError> {
        let mut records = self.write_guard();
        let position = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| DataError::not_found(R::element_name(), id.as_string()))?;
        records.remove(position);
        tracing::debug!(
            entity = %R::full_name(),
            id = %id.as_string(),
            "record removed"
        );
        Ok(())
    }
}

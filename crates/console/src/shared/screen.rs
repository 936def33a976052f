use std::collections::HashMap;
use std::sync::Arc;

use backend::shared::data::{ManagedRecord, RecordService};
use contracts::domain::common::RecordId;
use contracts::shared::{DataError, ListQuery};

use super::dialog::{DialogController, DialogState};
use super::list_utils::Sortable;
use super::query::{self, ListQueryState, PageResult};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Guard key for creations, which have no record id yet
const CREATE_KEY: &str = "__create__";

/// How the page slice is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

impl ViewMode {
    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Cards,
            ViewMode::Cards => ViewMode::Table,
        }
    }
}

/// Serializes mutations per record identifier and flags stale completions.
///
/// At most one token is live per key. `begin` refuses a second mutation for
/// a key already in flight; `finish` reports whether the caller's token is
/// still the live one — `invalidate` (dialog closed mid-request) retires the
/// key so the late response is dropped instead of applied.
#[derive(Debug, Default)]
pub struct MutationGuard {
    inflight: HashMap<String, u64>,
    next_token: u64,
}

impl MutationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, key: &str) -> Option<u64> {
        if self.inflight.contains_key(key) {
            return None;
        }
        self.next_token += 1;
        self.inflight.insert(key.to_string(), self.next_token);
        Some(self.next_token)
    }

    pub fn finish(&mut self, key: &str, token: u64) -> bool {
        match self.inflight.get(key) {
            Some(&live) if live == token => {
                self.inflight.remove(key);
                true
            }
            _ => false,
        }
    }

    pub fn invalidate(&mut self, key: &str) {
        self.inflight.remove(key);
    }
}

/// One management screen: the cached canonical list, the query parameters,
/// the dialog slot and the mutation protocol, generic over the record type.
///
/// The view adapter renders [`ListScreen::page`] as a table or as cards,
/// and drives the screen exclusively through the methods below; every
/// mutation goes to the data service first and the list is re-fetched
/// afterwards rather than patched locally.
pub struct ListScreen<R: ManagedRecord + Sortable> {
    service: Arc<dyn RecordService<R>>,
    records: Vec<R>,
    query: ListQueryState<R::Field>,
    dialog: DialogController<R::Id>,
    view_mode: ViewMode,
    last_error: Option<DataError>,
    guard: MutationGuard,
}

impl<R: ManagedRecord + Sortable> ListScreen<R> {
    pub fn new(service: Arc<dyn RecordService<R>>, page_size: usize) -> Self {
        Self {
            service,
            records: Vec::new(),
            query: ListQueryState::new(page_size),
            dialog: DialogController::new(),
            view_mode: ViewMode::default(),
            last_error: None,
            guard: MutationGuard::new(),
        }
    }

    /// Re-fetch the canonical list from the data service
    pub async fn refresh(&mut self) -> Result<(), DataError> {
        let page = self.service.list(ListQuery::default()).await?;
        self.records = page.records;
        self.clamp_page();
        Ok(())
    }

    /// The derived page for the view adapter
    pub fn page(&self) -> PageResult<R> {
        query::apply(&self.records, &self.query)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn query(&self) -> &ListQueryState<R::Field> {
        &self.query
    }

    pub fn dialog_state(&self) -> DialogState<R::Id> {
        self.dialog.state()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn last_error(&self) -> Option<&DataError> {
        self.last_error.as_ref()
    }

    // ------------------------------------------------------------------
    // Query parameter surface
    // ------------------------------------------------------------------

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.set_search_term(term);
    }

    pub fn toggle_sort(&mut self, field: R::Field) {
        self.query.toggle_sort(field);
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.set_page(page);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.query.set_page_size(page_size);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    // ------------------------------------------------------------------
    // Dialog transitions
    // ------------------------------------------------------------------

    pub fn open_create(&mut self) -> bool {
        self.dialog.open_create()
    }

    pub fn open_edit(&mut self, id: R::Id) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.dialog.open_edit(id)
    }

    pub fn open_view(&mut self, id: R::Id) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.dialog.open_view(id)
    }

    pub fn open_delete_confirm(&mut self, id: R::Id) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.dialog.open_delete_confirm(id)
    }

    /// Close the active overlay, discarding in-flight input. A mutation
    /// response that arrives after this call is dropped by the guard.
    pub fn cancel_dialog(&mut self) {
        match self.dialog.state() {
            DialogState::Creating => self.guard.invalidate(CREATE_KEY),
            state => {
                if let Some(id) = state.target() {
                    self.guard.invalidate(&id.as_string());
                }
            }
        }
        self.dialog.close();
    }

    // ------------------------------------------------------------------
    // Mutation protocol
    // ------------------------------------------------------------------

    /// Commit the create panel. No-op unless the dialog is `Creating`.
    pub async fn submit_create(&mut self, draft: R::Draft) -> Result<(), DataError> {
        if !self.dialog.is_creating() {
            log::warn!("{}: create submitted with no create panel open", R::list_name());
            return Ok(());
        }
        let Some(token) = self.guard.begin(CREATE_KEY) else {
            log::warn!("{}: create already in flight", R::list_name());
            return Ok(());
        };
        let result = self.service.create(draft).await.map(|_| ());
        if !self.guard.finish(CREATE_KEY, token) {
            return Ok(());
        }
        self.apply_mutation_outcome(result).await
    }

    /// Commit the edit panel. No-op unless the dialog is `Editing`.
    pub async fn submit_edit(&mut self, patch: R::Draft) -> Result<(), DataError> {
        let Some(id) = self.dialog.editing_target() else {
            log::warn!("{}: edit submitted with no edit panel open", R::list_name());
            return Ok(());
        };
        let key = id.as_string();
        let Some(token) = self.guard.begin(&key) else {
            log::warn!("{}: mutation for {} already in flight", R::list_name(), key);
            return Ok(());
        };
        let result = self.service.update(id, patch).await.map(|_| ());
        if !self.guard.finish(&key, token) {
            return Ok(());
        }
        self.apply_mutation_outcome(result).await
    }

    /// Commit the delete confirmation. No-op unless the dialog is
    /// `ConfirmingDelete`.
    pub async fn confirm_delete(&mut self) -> Result<(), DataError> {
        let Some(id) = self.dialog.deleting_target() else {
            log::warn!("{}: delete confirmed with no confirmation open", R::list_name());
            return Ok(());
        };
        let key = id.as_string();
        let Some(token) = self.guard.begin(&key) else {
            return Ok(());
        };
        let result = self.service.remove(id).await;
        if !self.guard.finish(&key, token) {
            return Ok(());
        }
        self.apply_mutation_outcome(result).await
    }

    fn contains(&self, id: R::Id) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    /// The mutation commits (or fails) before the dialog moves: success and
    /// stale-reference both close and re-fetch; validation and transport
    /// failures keep the dialog open with the cache untouched.
    async fn apply_mutation_outcome(&mut self, result: Result<(), DataError>) -> Result<(), DataError> {
        match result {
            Ok(()) => {
                self.dialog.close();
                self.last_error = None;
                self.refresh().await
            }
            Err(err) => {
                self.last_error = Some(err.clone());
                if err.is_not_found() {
                    self.dialog.close();
                    self.refresh().await?;
                }
                Err(err)
            }
        }
    }

    fn clamp_page(&mut self) {
        let pages = self.page().display_pages();
        if self.query.page() > pages {
            self.query.set_page(pages);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;
    use backend::domain::a002_agency::service::{insert_test_data, new_store};
    use backend::shared::data::MemoryStore;
    use contracts::domain::a002_agency::aggregate::{Agency, AgencyDto, AgencyId};
    use contracts::shared::ListPage;

    /// Delegates to an in-memory store while counting mutation calls
    struct CountingService {
        inner: MemoryStore<Agency>,
        creates: AtomicUsize,
        updates: AtomicUsize,
        removes: AtomicUsize,
        fail_transport: AtomicBool,
    }

    impl CountingService {
        fn new(inner: MemoryStore<Agency>) -> Self {
            Self {
                inner,
                creates: AtomicUsize::new(0),
                updates: AtomicUsize::new(0),
                removes: AtomicUsize::new(0),
                fail_transport: AtomicBool::new(false),
            }
        }

        fn mutation_count(&self) -> usize {
            self.creates.load(Ordering::SeqCst)
                + self.updates.load(Ordering::SeqCst)
                + self.removes.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RecordService<Agency> for CountingService {
        async fn list(&self, query: ListQuery) -> Result<ListPage<Agency>, DataError> {
            self.inner.list(query).await
        }

        async fn get_by_id(&self, id: AgencyId) -> Result<Option<Agency>, DataError> {
            self.inner.get_by_id(id).await
        }

        async fn create(&self, draft: AgencyDto) -> Result<Agency, DataError> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            self.inner.create(draft).await
        }

        async fn update(&self, id: AgencyId, patch: AgencyDto) -> Result<Agency, DataError> {
            self.updates.fetch_add(1, Ordering::SeqCst);
            if self.fail_transport.load(Ordering::SeqCst) {
                return Err(DataError::Transport("connection reset by peer".into()));
            }
            self.inner.update(id, patch).await
        }

        async fn remove(&self, id: AgencyId) -> Result<(), DataError> {
            self.removes.fetch_add(1, Ordering::SeqCst);
            self.inner.remove(id).await
        }
    }

    async fn seeded_service() -> Arc<CountingService> {
        let store = new_store();
        insert_test_data(&store).await.unwrap();
        Arc::new(CountingService::new(store))
    }

    async fn seeded_screen() -> (ListScreen<Agency>, Arc<CountingService>) {
        let service = seeded_service().await;
        let mut screen = ListScreen::new(service.clone(), DEFAULT_PAGE_SIZE);
        screen.refresh().await.unwrap();
        (screen, service)
    }

    fn patch(name: &str) -> AgencyDto {
        AgencyDto {
            name: name.to_string(),
            license_number: Some("CR-0000".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_save_invokes_exactly_one_update_then_idle() {
        let (mut screen, service) = seeded_screen().await;
        assert!(screen.open_edit(AgencyId::new(1)));

        screen.submit_edit(patch("Almosafer Travel")).await.unwrap();
        assert_eq!(service.updates.load(Ordering::SeqCst), 1);
        assert!(screen.dialog_state().is_idle());
        assert!(screen.records().iter().any(|a| a.name == "Almosafer Travel"));
    }

    #[tokio::test]
    async fn test_cancel_never_invokes_store() {
        let (mut screen, service) = seeded_screen().await;

        screen.open_edit(AgencyId::new(2));
        screen.cancel_dialog();
        screen.open_delete_confirm(AgencyId::new(2));
        screen.cancel_dialog();
        screen.open_create();
        screen.cancel_dialog();

        assert!(screen.dialog_state().is_idle());
        assert_eq!(service.mutation_count(), 0);
    }

    #[tokio::test]
    async fn test_submit_without_open_dialog_is_a_no_op() {
        let (mut screen, service) = seeded_screen().await;
        screen.submit_edit(patch("x")).await.unwrap();
        screen.confirm_delete().await.unwrap();
        assert_eq!(service.mutation_count(), 0);
    }

    #[tokio::test]
    async fn test_create_flow_adds_record_and_closes() {
        let (mut screen, service) = seeded_screen().await;
        let before = screen.records().len();

        assert!(screen.open_create());
        screen.submit_create(patch("Nile Holidays")).await.unwrap();

        assert!(screen.dialog_state().is_idle());
        assert_eq!(service.creates.load(Ordering::SeqCst), 1);
        assert_eq!(screen.records().len(), before + 1);
        // newest-first: the created record leads the refreshed cache
        assert_eq!(screen.records()[0].name, "Nile Holidays");
    }

    #[tokio::test]
    async fn test_validation_failure_keeps_dialog_open() {
        let (mut screen, _service) = seeded_screen().await;
        screen.open_edit(AgencyId::new(1));

        let result = screen.submit_edit(patch("")).await;
        assert!(matches!(result, Err(DataError::Validation(_))));
        assert_eq!(screen.dialog_state(), DialogState::Editing(AgencyId::new(1)));
        assert!(screen.last_error().is_some());
    }

    #[tokio::test]
    async fn test_stale_reference_force_closes_dialog() {
        let (mut screen, service) = seeded_screen().await;
        screen.open_edit(AgencyId::new(3));
        // the record disappears behind the screen's back
        service.inner.remove(AgencyId::new(3)).await.unwrap();

        let result = screen.submit_edit(patch("too late")).await;
        assert!(matches!(result, Err(DataError::NotFound { .. })));
        assert!(screen.dialog_state().is_idle());
        assert!(screen.last_error().unwrap().is_not_found());
        // cache was re-fetched without the stale record
        assert!(!screen.records().iter().any(|a| a.base.id == AgencyId::new(3)));
    }

    #[tokio::test]
    async fn test_transport_failure_leaves_cache_untouched() {
        let (mut screen, service) = seeded_screen().await;
        let cached = screen.records().to_vec();
        screen.open_edit(AgencyId::new(1));
        service.fail_transport.store(true, Ordering::SeqCst);

        let result = screen.submit_edit(patch("unreachable")).await;
        assert!(matches!(result, Err(DataError::Transport(_))));
        assert_eq!(screen.dialog_state(), DialogState::Editing(AgencyId::new(1)));
        assert_eq!(screen.records(), cached.as_slice());

        // retry succeeds once the service recovers
        service.fail_transport.store(false, Ordering::SeqCst);
        screen.submit_edit(patch("reachable again")).await.unwrap();
        assert!(screen.dialog_state().is_idle());
    }

    #[tokio::test]
    async fn test_open_edit_requires_record_in_cache() {
        let (mut screen, _service) = seeded_screen().await;
        assert!(!screen.open_edit(AgencyId::new(99)));
        assert!(screen.dialog_state().is_idle());
    }

    #[test]
    fn test_default_page_size_is_offered() {
        assert!(PAGE_SIZE_OPTIONS.contains(&DEFAULT_PAGE_SIZE));
    }

    #[tokio::test]
    async fn test_page_clamps_after_collection_shrinks() {
        let (mut screen, _service) = seeded_screen().await;
        screen.set_page_size(2);
        screen.set_page(3); // 5 seeded agencies -> 3 pages
        assert_eq!(screen.page().page_items.len(), 1);

        let last_id = screen.page().page_items[0].base.id;
        screen.open_delete_confirm(last_id);
        screen.confirm_delete().await.unwrap();

        assert_eq!(screen.query().page(), 2);
        assert!(!screen.page().page_items.is_empty());
    }

    #[tokio::test]
    async fn test_view_mode_toggles_between_table_and_cards() {
        let (mut screen, _service) = seeded_screen().await;
        assert_eq!(screen.view_mode(), ViewMode::Table);
        screen.toggle_view_mode();
        assert_eq!(screen.view_mode(), ViewMode::Cards);
        screen.toggle_view_mode();
        assert_eq!(screen.view_mode(), ViewMode::Table);
    }

    #[test]
    fn test_guard_rejects_second_mutation_for_same_key() {
        let mut guard = MutationGuard::new();
        let token = guard.begin("7").unwrap();
        assert!(guard.begin("7").is_none());
        // a different record is free to mutate concurrently
        assert!(guard.begin("8").is_some());
        assert!(guard.finish("7", token));
        assert!(guard.begin("7").is_some());
    }

    #[test]
    fn test_guard_drops_stale_completion_after_invalidate() {
        let mut guard = MutationGuard::new();
        let token = guard.begin("7").unwrap();
        guard.invalidate("7"); // dialog closed mid-request
        assert!(!guard.finish("7", token));
        // the key is free again and old tokens stay dead
        let fresh = guard.begin("7").unwrap();
        assert_ne!(fresh, token);
        assert!(!guard.finish("7", token));
        assert!(guard.finish("7", fresh));
    }
}

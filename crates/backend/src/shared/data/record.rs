use contracts::domain::common::RecordEntity;

/// Per-record-type adapter between the generic store/screen machinery and a
/// concrete aggregate.
///
/// One implementation per managed record type supplies the id-generation
/// strategy, the draft application rules and the designated searchable
/// fields; everything else is generic.
pub trait ManagedRecord: RecordEntity + Clone + Send + Sync + 'static {
    /// Draft/patch shape accepted by create and update (the record's DTO)
    type Draft: Clone + Send + Sync + 'static;

    /// Allocate an identifier for a new record given the current collection.
    ///
    /// Numeric record types allocate max-plus-one over the ids currently in
    /// the collection, not over a historical counter; uuid-identified types
    /// ignore `existing`.
    fn allocate_id(existing: &[Self]) -> Self::Id;

    /// Build a new record from a draft under the given identity
    fn from_draft(id: Self::Id, draft: &Self::Draft) -> Self;

    /// Merge an edit patch over this record. Must never touch identity.
    fn apply_draft(&mut self, draft: &Self::Draft);

    /// Required-field validation, delegated to the aggregate
    fn validate(&self) -> Result<(), String>;

    /// Pre-persist hook, run after validation on every create and update.
    /// Refreshes the updated-at timestamp.
    fn before_write(&mut self);

    /// The designated searchable fields of this record type
    fn search_haystack(&self) -> Vec<&str>;

    /// Case-insensitive substring match over the searchable fields.
    /// An empty or whitespace-only term matches everything.
    fn matches_search(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_haystack()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

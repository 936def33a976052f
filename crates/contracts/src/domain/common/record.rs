use super::{RecordId, RecordMetadata};

/// Trait implemented by every managed record type.
///
/// Instance accessors expose the identity/lifecycle invariants the store
/// maintains; the static methods name the record class for dialogs, error
/// messages and logging.
pub trait RecordEntity {
    /// Identifier type of the record
    type Id: RecordId;

    /// Record id
    fn id(&self) -> Self::Id;

    /// Lifecycle metadata
    fn metadata(&self) -> &RecordMetadata;

    /// Index of the record class in the system (e.g. "a001")
    fn record_index() -> &'static str;

    /// Collection name (e.g. "guest")
    fn collection_name() -> &'static str;

    /// Singular display name (e.g. "Guest")
    fn element_name() -> &'static str;

    /// Plural display name (e.g. "Guests")
    fn list_name() -> &'static str;

    /// Full class name, index plus collection (e.g. "a001_guest")
    fn full_name() -> String {
        format!("{}_{}", Self::record_index(), Self::collection_name())
    }
}

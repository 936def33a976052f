use super::RecordMetadata;
use serde::{Deserialize, Serialize};

/// Base fields shared by every managed record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseRecord<Id> {
    /// Unique record identifier
    pub id: Id,
    /// Free-form operator note
    pub comment: Option<String>,
    /// Lifecycle metadata
    pub metadata: RecordMetadata,
}

impl<Id> BaseRecord<Id> {
    /// New base for a freshly created record
    pub fn new(id: Id) -> Self {
        Self {
            id,
            comment: None,
            metadata: RecordMetadata::new(),
        }
    }

    /// Refresh the updated-at timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}

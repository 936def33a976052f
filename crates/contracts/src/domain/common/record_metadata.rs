use serde::{Deserialize, Serialize};

/// Lifecycle metadata carried by every record instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMetadata {
    /// Set once when the record is created
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Refreshed on every mutation, including the creation event itself
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl RecordMetadata {
    /// Fresh metadata for a new record; both timestamps start equal
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }
}

impl Default for RecordMetadata {
    fn default() -> Self {
        Self::new()
    }
}

use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for record identifier types.
///
/// Identity is assigned once at creation and is immutable afterwards; the
/// string form is what dialogs and mutation guards key on.
pub trait RecordId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug + Send + Sync
{
    /// Render the id as a string
    fn as_string(&self) -> String;

    /// Parse an id from its string form
    fn from_string(s: &str) -> Result<Self, String>;
}

// Implementations for primitive id types

impl RecordId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>().map_err(|e| format!("Invalid i64: {}", e))
    }
}

impl RecordId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s).map_err(|e| format!("Invalid UUID: {}", e))
    }
}

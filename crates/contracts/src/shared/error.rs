use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure taxonomy of the data-service boundary.
///
/// Expected conditions only — the store never panics past its operation
/// boundary. Each variant maps to a distinct surfacing rule in the screens:
/// validation stays inline at the form, a stale reference force-closes the
/// dialog, a transport failure keeps the local cache untouched so a retry
/// is safe.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DataError {
    /// Malformed or incomplete draft
    #[error("{0}")]
    Validation(String),

    /// Reference to a record that no longer exists
    #[error("{entity} {id} not found")]
    NotFound { entity: String, id: String },

    /// Remote data service unreachable or misbehaving
    #[error("transport error: {0}")]
    Transport(String),
}

impl DataError {
    pub fn validation(message: impl Into<String>) -> Self {
        DataError::Validation(message.into())
    }

    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DataError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// True for the stale-reference case, which force-closes dialogs
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataError::NotFound { .. })
    }
}

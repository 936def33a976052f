use serde::{Deserialize, Serialize};

/// Sort direction requested by a list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Ascending)
    }

    /// The opposite direction (header click on the active sort column)
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

/// Parameters of a data-service list call.
///
/// A local in-memory service can ignore pagination entirely; a remote
/// implementation may filter server-side. Either way the reported total is
/// independent of any pagination the caller applies afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl ListQuery {
    pub fn with_search_term(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
        }
    }
}

/// Result of a data-service list call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPage<R> {
    pub records: Vec<R>,
    /// Collection size after server-side filtering, before any caller-side
    /// pagination
    #[serde(rename = "totalCount")]
    pub total_count: usize,
}

use serde::{Deserialize, Serialize};

/// Guest lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuestStatus {
    Active,
    Inactive,
}

impl GuestStatus {
    /// Stable status code
    pub fn code(&self) -> &'static str {
        match self {
            GuestStatus::Active => "active",
            GuestStatus::Inactive => "inactive",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            GuestStatus::Active => "Active",
            GuestStatus::Inactive => "Inactive",
        }
    }

    /// All statuses
    pub fn all() -> Vec<GuestStatus> {
        vec![GuestStatus::Active, GuestStatus::Inactive]
    }

    /// Parse from code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(GuestStatus::Active),
            "inactive" => Some(GuestStatus::Inactive),
            _ => None,
        }
    }
}

impl Default for GuestStatus {
    fn default() -> Self {
        GuestStatus::Active
    }
}

use serde::{Deserialize, Serialize};

/// Booking agency lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgencyStatus {
    Active,
    Suspended,
}

impl AgencyStatus {
    /// Stable status code
    pub fn code(&self) -> &'static str {
        match self {
            AgencyStatus::Active => "active",
            AgencyStatus::Suspended => "suspended",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            AgencyStatus::Active => "Active",
            AgencyStatus::Suspended => "Suspended",
        }
    }

    /// All statuses
    pub fn all() -> Vec<AgencyStatus> {
        vec![AgencyStatus::Active, AgencyStatus::Suspended]
    }

    /// Parse from code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(AgencyStatus::Active),
            "suspended" => Some(AgencyStatus::Suspended),
            _ => None,
        }
    }
}

impl Default for AgencyStatus {
    fn default() -> Self {
        AgencyStatus::Active
    }
}

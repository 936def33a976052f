use serde::{Deserialize, Serialize};

/// Occupancy status of an inventory unit.
///
/// Does not affect list inclusion, only display and the default sort
/// tie-break on the units screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitStatus {
    Available,
    Occupied,
    Reserved,
    Maintenance,
    OutOfService,
}

impl UnitStatus {
    /// Stable status code
    pub fn code(&self) -> &'static str {
        match self {
            UnitStatus::Available => "available",
            UnitStatus::Occupied => "occupied",
            UnitStatus::Reserved => "reserved",
            UnitStatus::Maintenance => "maintenance",
            UnitStatus::OutOfService => "out-of-service",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitStatus::Available => "Available",
            UnitStatus::Occupied => "Occupied",
            UnitStatus::Reserved => "Reserved",
            UnitStatus::Maintenance => "Maintenance",
            UnitStatus::OutOfService => "Out of service",
        }
    }

    /// All statuses
    pub fn all() -> Vec<UnitStatus> {
        vec![
            UnitStatus::Available,
            UnitStatus::Occupied,
            UnitStatus::Reserved,
            UnitStatus::Maintenance,
            UnitStatus::OutOfService,
        ]
    }

    /// Parse from code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "available" => Some(UnitStatus::Available),
            "occupied" => Some(UnitStatus::Occupied),
            "reserved" => Some(UnitStatus::Reserved),
            "maintenance" => Some(UnitStatus::Maintenance),
            "out-of-service" => Some(UnitStatus::OutOfService),
            _ => None,
        }
    }
}

impl Default for UnitStatus {
    fn default() -> Self {
        UnitStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for status in UnitStatus::all() {
            assert_eq!(UnitStatus::from_code(status.code()), Some(status));
        }
    }
}

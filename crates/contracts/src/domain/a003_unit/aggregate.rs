use crate::domain::common::{BaseRecord, RecordEntity, RecordId, RecordMetadata};
use crate::enums::UnitStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub Uuid);

impl UnitId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl RecordId for UnitId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(UnitId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(flatten)]
    pub base: BaseRecord<UnitId>,

    /// Door number, the operator-facing identifier
    pub number: String,

    pub name: Option<String>,

    pub floor: Option<i32>,

    #[serde(rename = "areaSqm")]
    pub area_sqm: Option<f64>,

    #[serde(rename = "maxGuests", default = "default_max_guests")]
    pub max_guests: i32,

    #[serde(rename = "lastServicedOn")]
    pub last_serviced_on: Option<NaiveDate>,

    #[serde(default)]
    pub status: UnitStatus,
}

fn default_max_guests() -> i32 {
    2
}

impl Unit {
    pub fn new_for_insert(dto: &UnitDto) -> Self {
        let mut unit = Self {
            base: BaseRecord::new(UnitId::new_v4()),
            number: dto.number.clone(),
            name: dto.name.clone(),
            floor: dto.floor,
            area_sqm: dto.area_sqm,
            max_guests: dto.max_guests.unwrap_or_else(default_max_guests),
            last_serviced_on: dto.last_serviced_on,
            status: dto.status.unwrap_or_default(),
        };
        unit.base.comment = dto.comment.clone();
        unit
    }

    pub fn new_with_id(id: UnitId, dto: &UnitDto) -> Self {
        let mut unit = Self::new_for_insert(dto);
        unit.base.id = id;
        unit
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    /// Merge an edit patch; identity is never taken from the patch.
    pub fn update(&mut self, dto: &UnitDto) {
        self.number = dto.number.clone();
        self.name = dto.name.clone();
        self.floor = dto.floor;
        self.area_sqm = dto.area_sqm;
        if let Some(max_guests) = dto.max_guests {
            self.max_guests = max_guests;
        }
        self.last_serviced_on = dto.last_serviced_on;
        if let Some(status) = dto.status {
            self.status = status;
        }
        self.base.comment = dto.comment.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.number.trim().is_empty() {
            return Err("Unit number must not be empty".into());
        }
        if self.max_guests <= 0 {
            return Err("Max guests must be positive".into());
        }
        if matches!(self.area_sqm, Some(a) if a <= 0.0) {
            return Err("Area must be positive".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl RecordEntity for Unit {
    type Id = UnitId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn metadata(&self) -> &RecordMetadata {
        &self.base.metadata
    }

    fn record_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "unit"
    }

    fn element_name() -> &'static str {
        "Unit"
    }

    fn list_name() -> &'static str {
        "Units"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UnitDto {
    pub id: Option<String>,
    pub number: String,
    pub name: Option<String>,
    pub floor: Option<i32>,
    #[serde(rename = "areaSqm")]
    pub area_sqm: Option<f64>,
    #[serde(rename = "maxGuests")]
    pub max_guests: Option<i32>,
    #[serde(rename = "lastServicedOn")]
    pub last_serviced_on: Option<NaiveDate>,
    pub status: Option<UnitStatus>,
    pub comment: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_units_get_distinct_ids() {
        let dto = UnitDto {
            number: "101".to_string(),
            ..Default::default()
        };
        let a = Unit::new_for_insert(&dto);
        let b = Unit::new_for_insert(&dto);
        assert_ne!(a.base.id, b.base.id);
    }

    #[test]
    fn test_validate_rejects_non_positive_capacity() {
        let dto = UnitDto {
            number: "101".to_string(),
            max_guests: Some(0),
            ..Default::default()
        };
        let unit = Unit::new_for_insert(&dto);
        assert!(unit.validate().is_err());
    }
}

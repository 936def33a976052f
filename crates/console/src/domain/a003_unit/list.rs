use std::sync::Arc;

use backend::shared::data::RecordService;
use contracts::domain::a003_unit::aggregate::Unit;
use contracts::domain::common::RecordEntity;

use crate::shared::comparators::FieldValue;
use crate::shared::list_utils::{format_timestamp, Sortable};
use crate::shared::screen::{ListScreen, DEFAULT_PAGE_SIZE};

/// Sortable columns of the units screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitField {
    Number,
    Name,
    Floor,
    AreaSqm,
    MaxGuests,
    LastServicedOn,
    Status,
    CreatedAt,
}

impl Sortable for Unit {
    type Field = UnitField;

    fn field_value(&self, field: UnitField) -> FieldValue<'_> {
        match field {
            UnitField::Number => FieldValue::Text(&self.number),
            UnitField::Name => self
                .name
                .as_deref()
                .map(FieldValue::Text)
                .unwrap_or(FieldValue::Missing),
            UnitField::Floor => self
                .floor
                .map(|f| FieldValue::Number(f as f64))
                .unwrap_or(FieldValue::Missing),
            UnitField::AreaSqm => self
                .area_sqm
                .map(FieldValue::Number)
                .unwrap_or(FieldValue::Missing),
            UnitField::MaxGuests => FieldValue::Number(self.max_guests as f64),
            UnitField::LastServicedOn => self
                .last_serviced_on
                .map(FieldValue::Date)
                .unwrap_or(FieldValue::Missing),
            UnitField::Status => FieldValue::Text(self.status.display_name()),
            UnitField::CreatedAt => FieldValue::DateTime(self.metadata().created_at),
        }
    }
}

pub type UnitScreen = ListScreen<Unit>;

pub fn unit_screen(service: Arc<dyn RecordService<Unit>>) -> UnitScreen {
    ListScreen::new(service, DEFAULT_PAGE_SIZE)
}

/// Row projection consumed by the table and card presentations
#[derive(Debug, Clone)]
pub struct UnitRow {
    pub id: String,
    pub number: String,
    pub name: String,
    pub floor: String,
    pub area_sqm: String,
    pub max_guests: String,
    pub last_serviced_on: String,
    pub status: &'static str,
    pub comment: String,
    pub created_at: String,
}

impl From<Unit> for UnitRow {
    fn from(u: Unit) -> Self {
        Self {
            id: u.to_string_id(),
            number: u.number,
            name: u.name.unwrap_or_else(|| "-".to_string()),
            floor: u.floor.map(|f| f.to_string()).unwrap_or_else(|| "-".to_string()),
            area_sqm: u
                .area_sqm
                .map(|a| format!("{a:.1}"))
                .unwrap_or_else(|| "-".to_string()),
            max_guests: u.max_guests.to_string(),
            last_serviced_on: u
                .last_serviced_on
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
            status: u.status.display_name(),
            comment: u.base.comment.unwrap_or_else(|| "-".to_string()),
            created_at: format_timestamp(u.base.metadata.created_at),
        }
    }
}

use std::sync::Arc;

use backend::shared::data::RecordService;
use contracts::domain::a001_guest::aggregate::Guest;
use contracts::domain::common::RecordEntity;

use crate::shared::comparators::FieldValue;
use crate::shared::list_utils::{format_timestamp, Sortable};
use crate::shared::screen::{ListScreen, DEFAULT_PAGE_SIZE};

/// Sortable columns of the guests screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestField {
    FullName,
    Email,
    Phone,
    NationalId,
    Nationality,
    DateOfBirth,
    Status,
    CreatedAt,
}

impl Sortable for Guest {
    type Field = GuestField;

    fn field_value(&self, field: GuestField) -> FieldValue<'_> {
        match field {
            GuestField::FullName => FieldValue::Text(&self.full_name),
            GuestField::Email => FieldValue::Text(&self.email),
            GuestField::Phone => FieldValue::Text(&self.phone),
            GuestField::NationalId => FieldValue::Text(&self.national_id),
            GuestField::Nationality => self
                .nationality
                .as_deref()
                .map(FieldValue::Text)
                .unwrap_or(FieldValue::Missing),
            GuestField::DateOfBirth => self
                .date_of_birth
                .map(FieldValue::Date)
                .unwrap_or(FieldValue::Missing),
            GuestField::Status => FieldValue::Text(self.status.display_name()),
            GuestField::CreatedAt => FieldValue::DateTime(self.metadata().created_at),
        }
    }
}

pub type GuestScreen = ListScreen<Guest>;

pub fn guest_screen(service: Arc<dyn RecordService<Guest>>) -> GuestScreen {
    ListScreen::new(service, DEFAULT_PAGE_SIZE)
}

/// Row projection consumed by the table and card presentations
#[derive(Debug, Clone)]
pub struct GuestRow {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
    pub nationality: String,
    pub date_of_birth: String,
    pub status: &'static str,
    pub comment: String,
    pub created_at: String,
}

impl From<Guest> for GuestRow {
    fn from(g: Guest) -> Self {
        Self {
            id: g.to_string_id(),
            full_name: g.full_name,
            email: g.email,
            phone: g.phone,
            national_id: g.national_id,
            nationality: g.nationality.unwrap_or_else(|| "-".to_string()),
            date_of_birth: g
                .date_of_birth
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
            status: g.status.display_name(),
            comment: g.base.comment.unwrap_or_else(|| "-".to_string()),
            created_at: format_timestamp(g.base.metadata.created_at),
        }
    }
}

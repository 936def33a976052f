use std::sync::Arc;

use backend::shared::data::RecordService;
use contracts::domain::a002_agency::aggregate::Agency;
use contracts::domain::common::RecordEntity;

use crate::shared::comparators::FieldValue;
use crate::shared::list_utils::{format_timestamp, Sortable};
use crate::shared::screen::{ListScreen, DEFAULT_PAGE_SIZE};

/// Sortable columns of the agencies screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgencyField {
    Name,
    ContactPerson,
    Email,
    Phone,
    LicenseNumber,
    Country,
    ContractStart,
    Status,
    CreatedAt,
}

impl Sortable for Agency {
    type Field = AgencyField;

    fn field_value(&self, field: AgencyField) -> FieldValue<'_> {
        match field {
            AgencyField::Name => FieldValue::Text(&self.name),
            AgencyField::ContactPerson => self
                .contact_person
                .as_deref()
                .map(FieldValue::Text)
                .unwrap_or(FieldValue::Missing),
            AgencyField::Email => FieldValue::Text(&self.email),
            AgencyField::Phone => FieldValue::Text(&self.phone),
            AgencyField::LicenseNumber => FieldValue::Text(&self.license_number),
            AgencyField::Country => self
                .country
                .as_deref()
                .map(FieldValue::Text)
                .unwrap_or(FieldValue::Missing),
            AgencyField::ContractStart => self
                .contract_start
                .map(FieldValue::Date)
                .unwrap_or(FieldValue::Missing),
            AgencyField::Status => FieldValue::Text(self.status.display_name()),
            AgencyField::CreatedAt => FieldValue::DateTime(self.metadata().created_at),
        }
    }
}

pub type AgencyScreen = ListScreen<Agency>;

pub fn agency_screen(service: Arc<dyn RecordService<Agency>>) -> AgencyScreen {
    ListScreen::new(service, DEFAULT_PAGE_SIZE)
}

/// Row projection consumed by the table and card presentations
#[derive(Debug, Clone)]
pub struct AgencyRow {
    pub id: String,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
    pub country: String,
    pub contract_start: String,
    pub status: &'static str,
    pub comment: String,
    pub created_at: String,
}

impl From<Agency> for AgencyRow {
    fn from(a: Agency) -> Self {
        Self {
            id: a.to_string_id(),
            name: a.name,
            contact_person: a.contact_person.unwrap_or_else(|| "-".to_string()),
            email: a.email,
            phone: a.phone,
            license_number: a.license_number,
            country: a.country.unwrap_or_else(|| "-".to_string()),
            contract_start: a
                .contract_start
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
            status: a.status.display_name(),
            comment: a.base.comment.unwrap_or_else(|| "-".to_string()),
            created_at: format_timestamp(a.base.metadata.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::shared::data::MemoryStore;
    use contracts::domain::a002_agency::aggregate::{AgencyDto, AgencyId};
    use contracts::shared::SortDirection;

    async fn two_agency_service() -> Arc<MemoryStore<Agency>> {
        let store = MemoryStore::new();
        for (name, license) in [("Almosafer", "CR-1010-4482"), ("Booking.com", "NL-31047344")] {
            store
                .create(AgencyDto {
                    name: name.to_string(),
                    license_number: Some(license.to_string()),
                    ..Default::default()
                })
                .await
                .unwrap();
        }
        Arc::new(store)
    }

    #[tokio::test]
    async fn test_search_sort_delete_round_trip() {
        let service = two_agency_service().await;
        let mut screen = agency_screen(service.clone());
        screen.refresh().await.unwrap();

        // search "book" narrows the list to Booking.com
        screen.set_search_term("book");
        let filtered = screen.page();
        assert_eq!(filtered.total_count, 1);
        assert_eq!(filtered.page_items[0].base.id, AgencyId::new(2));

        // with the filter cleared, name ascending puts Almosafer first
        screen.set_search_term("");
        screen.toggle_sort(AgencyField::Name);
        let sorted = screen.page();
        let names: Vec<&str> = sorted
            .page_items
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["Almosafer", "Booking.com"]);

        // delete Almosafer through the confirmation dialog
        assert!(screen.open_delete_confirm(AgencyId::new(1)));
        screen.confirm_delete().await.unwrap();

        assert!(screen.dialog_state().is_idle());
        assert_eq!(screen.records().len(), 1);
        assert_eq!(screen.records()[0].base.id, AgencyId::new(2));
    }

    #[tokio::test]
    async fn test_missing_contract_start_sorts_last() {
        let service = two_agency_service().await;
        service
            .create(AgencyDto {
                name: "Gulf Gateway Tours".to_string(),
                license_number: Some("BH-20447".to_string()),
                contract_start: chrono::NaiveDate::from_ymd_opt(2024, 4, 10),
                ..Default::default()
            })
            .await
            .unwrap();

        let mut screen = agency_screen(service);
        screen.refresh().await.unwrap();
        // ascending: the two agencies without a contract date sink
        screen.toggle_sort(AgencyField::ContractStart);
        let page = screen.page();
        assert_eq!(page.page_items[0].name, "Gulf Gateway Tours");
        assert!(page.page_items[2].contract_start.is_none());

        // descending: still last, not first
        screen.toggle_sort(AgencyField::ContractStart);
        assert_eq!(
            screen.query().sort(),
            Some((AgencyField::ContractStart, SortDirection::Descending))
        );
        let page = screen.page();
        assert_eq!(page.page_items[0].name, "Gulf Gateway Tours");
        assert!(page.page_items[2].contract_start.is_none());
    }

    #[test]
    fn test_row_projection() {
        let dto = AgencyDto {
            name: "Almosafer".to_string(),
            license_number: Some("CR-1010-4482".to_string()),
            country: Some("Saudi Arabia".to_string()),
            ..Default::default()
        };
        let row = AgencyRow::from(Agency::new_for_insert(AgencyId::new(1), &dto));
        assert_eq!(row.id, "1");
        assert_eq!(row.country, "Saudi Arabia");
        assert_eq!(row.contact_person, "-");
        assert_eq!(row.contract_start, "-");
    }
}

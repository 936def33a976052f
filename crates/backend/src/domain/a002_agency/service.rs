use chrono::NaiveDate;
use contracts::domain::a002_agency::aggregate::{Agency, AgencyDto, AgencyId};
use contracts::enums::AgencyStatus;
use contracts::shared::DataError;

use crate::shared::data::{ManagedRecord, MemoryStore, RecordService};

impl ManagedRecord for Agency {
    type Draft = AgencyDto;

    fn allocate_id(existing: &[Agency]) -> AgencyId {
        let max = existing.iter().map(|a| a.base.id.value()).max().unwrap_or(0);
        AgencyId::new(max + 1)
    }

    fn from_draft(id: AgencyId, draft: &AgencyDto) -> Agency {
        Agency::new_for_insert(id, draft)
    }

    fn apply_draft(&mut self, draft: &AgencyDto) {
        self.update(draft);
    }

    fn validate(&self) -> Result<(), String> {
        Agency::validate(self)
    }

    fn before_write(&mut self) {
        Agency::before_write(self);
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.phone.as_str(),
            self.license_number.as_str(),
        ]
    }
}

/// Fresh, empty agency store
pub fn new_store() -> MemoryStore<Agency> {
    MemoryStore::new()
}

/// Seed the store with demo agencies
pub async fn insert_test_data(store: &MemoryStore<Agency>) -> Result<(), DataError> {
    for dto in test_data() {
        store.create(dto).await?;
    }
    Ok(())
}

fn test_data() -> Vec<AgencyDto> {
    vec![
        AgencyDto {
            name: "Almosafer".into(),
            contact_person: Some("Khalid Al-Otaibi".into()),
            email: Some("partners@almosafer.example".into()),
            phone: Some("+966 11 834 2000".into()),
            license_number: Some("CR-1010-4482".into()),
            country: Some("Saudi Arabia".into()),
            contract_start: NaiveDate::from_ymd_opt(2023, 1, 15),
            status: Some(AgencyStatus::Active),
            ..Default::default()
        },
        AgencyDto {
            name: "Booking.com".into(),
            contact_person: Some("Marije de Vries".into()),
            email: Some("partner.services@booking.example".into()),
            phone: Some("+31 20 712 5600".into()),
            license_number: Some("NL-31047344".into()),
            country: Some("Netherlands".into()),
            contract_start: NaiveDate::from_ymd_opt(2021, 9, 1),
            status: Some(AgencyStatus::Active),
            ..Default::default()
        },
        AgencyDto {
            name: "Expedia".into(),
            email: Some("lodging@expedia.example".into()),
            phone: Some("+1 206 481 7200".into()),
            license_number: Some("US-91-1996083".into()),
            country: Some("United States".into()),
            status: Some(AgencyStatus::Active),
            ..Default::default()
        },
        AgencyDto {
            name: "Wego Travel".into(),
            contact_person: Some("Priya Nair".into()),
            phone: Some("+971 4 247 0880".into()),
            license_number: Some("AE-DTCM-88412".into()),
            country: Some("United Arab Emirates".into()),
            contract_start: NaiveDate::from_ymd_opt(2024, 4, 10),
            status: Some(AgencyStatus::Suspended),
            comment: Some("Contract under renegotiation".into()),
            ..Default::default()
        },
        AgencyDto {
            name: "Gulf Gateway Tours".into(),
            phone: Some("+973 17 533 990".into()),
            license_number: Some("BH-20447".into()),
            status: Some(AgencyStatus::Active),
            ..Default::default()
        },
    ]
}

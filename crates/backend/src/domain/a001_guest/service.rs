use chrono::NaiveDate;
use contracts::domain::a001_guest::aggregate::{Guest, GuestDto, GuestId};
use contracts::enums::GuestStatus;
use contracts::shared::DataError;

use crate::shared::data::{ManagedRecord, MemoryStore, RecordService};

impl ManagedRecord for Guest {
    type Draft = GuestDto;

    fn allocate_id(existing: &[Guest]) -> GuestId {
        let max = existing.iter().map(|g| g.base.id.value()).max().unwrap_or(0);
        GuestId::new(max + 1)
    }

    fn from_draft(id: GuestId, draft: &GuestDto) -> Guest {
        Guest::new_for_insert(id, draft)
    }

    fn apply_draft(&mut self, draft: &GuestDto) {
        self.update(draft);
    }

    fn validate(&self) -> Result<(), String> {
        Guest::validate(self)
    }

    fn before_write(&mut self) {
        Guest::before_write(self);
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![
            self.full_name.as_str(),
            self.phone.as_str(),
            self.national_id.as_str(),
        ]
    }
}

/// Fresh, empty guest store
pub fn new_store() -> MemoryStore<Guest> {
    MemoryStore::new()
}

/// Seed the store with demo guests
pub async fn insert_test_data(store: &MemoryStore<Guest>) -> Result<(), DataError> {
    for dto in test_data() {
        store.create(dto).await?;
    }
    Ok(())
}

fn test_data() -> Vec<GuestDto> {
    vec![
        GuestDto {
            full_name: "Mohammed Al-Qahtani".into(),
            email: Some("m.alqahtani@example.com".into()),
            phone: Some("+966 50 123 4567".into()),
            national_id: Some("1089403221".into()),
            nationality: Some("Saudi Arabia".into()),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 14),
            status: Some(GuestStatus::Active),
            ..Default::default()
        },
        GuestDto {
            full_name: "Fatima Al-Harbi".into(),
            email: Some("fatima.h@example.com".into()),
            phone: Some("+966 55 882 1904".into()),
            national_id: Some("1122750983".into()),
            nationality: Some("Saudi Arabia".into()),
            status: Some(GuestStatus::Active),
            ..Default::default()
        },
        GuestDto {
            full_name: "James Whitfield".into(),
            email: Some("j.whitfield@example.co.uk".into()),
            phone: Some("+44 7700 900123".into()),
            national_id: Some("GBR-552019443".into()),
            nationality: Some("United Kingdom".into()),
            date_of_birth: NaiveDate::from_ymd_opt(1978, 11, 2),
            status: Some(GuestStatus::Inactive),
            comment: Some("Late checkout preferred".into()),
            ..Default::default()
        },
        GuestDto {
            full_name: "Ayse Demir".into(),
            email: Some("ayse.demir@example.com".into()),
            phone: Some("+90 532 014 7788".into()),
            national_id: Some("TUR-90218834".into()),
            nationality: Some("Turkey".into()),
            date_of_birth: NaiveDate::from_ymd_opt(1992, 6, 30),
            status: Some(GuestStatus::Active),
            ..Default::default()
        },
        GuestDto {
            full_name: "Omar Haddad".into(),
            phone: Some("+962 79 555 0102".into()),
            national_id: Some("JOR-4410275".into()),
            nationality: Some("Jordan".into()),
            status: Some(GuestStatus::Active),
            ..Default::default()
        },
    ]
}

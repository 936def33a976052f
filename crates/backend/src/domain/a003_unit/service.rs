use chrono::NaiveDate;
use contracts::domain::a003_unit::aggregate::{Unit, UnitDto, UnitId};
use contracts::enums::UnitStatus;
use contracts::shared::DataError;

use crate::shared::data::{ManagedRecord, MemoryStore, RecordService};

impl ManagedRecord for Unit {
    type Draft = UnitDto;

    // Units are uuid-identified; the current collection plays no part.
    fn allocate_id(_existing: &[Unit]) -> UnitId {
        UnitId::new_v4()
    }

    fn from_draft(id: UnitId, draft: &UnitDto) -> Unit {
        Unit::new_with_id(id, draft)
    }

    fn apply_draft(&mut self, draft: &UnitDto) {
        self.update(draft);
    }

    fn validate(&self) -> Result<(), String> {
        Unit::validate(self)
    }

    fn before_write(&mut self) {
        Unit::before_write(self);
    }

    fn search_haystack(&self) -> Vec<&str> {
        let mut fields = vec![self.number.as_str()];
        if let Some(name) = self.name.as_deref() {
            fields.push(name);
        }
        fields
    }
}

/// Fresh, empty unit store
pub fn new_store() -> MemoryStore<Unit> {
    MemoryStore::new()
}

/// Seed the store with demo units
pub async fn insert_test_data(store: &MemoryStore<Unit>) -> Result<(), DataError> {
    for dto in test_data() {
        store.create(dto).await?;
    }
    Ok(())
}

fn test_data() -> Vec<UnitDto> {
    vec![
        UnitDto {
            number: "101".into(),
            name: Some("Standard Twin".into()),
            floor: Some(1),
            area_sqm: Some(28.5),
            max_guests: Some(2),
            last_serviced_on: NaiveDate::from_ymd_opt(2025, 7, 18),
            status: Some(UnitStatus::Available),
            ..Default::default()
        },
        UnitDto {
            number: "102".into(),
            name: Some("Standard Twin".into()),
            floor: Some(1),
            area_sqm: Some(28.5),
            max_guests: Some(2),
            last_serviced_on: NaiveDate::from_ymd_opt(2025, 6, 2),
            status: Some(UnitStatus::Occupied),
            ..Default::default()
        },
        UnitDto {
            number: "201".into(),
            name: Some("Deluxe King".into()),
            floor: Some(2),
            area_sqm: Some(36.0),
            max_guests: Some(3),
            status: Some(UnitStatus::Reserved),
            ..Default::default()
        },
        UnitDto {
            number: "305".into(),
            name: Some("Corner Suite".into()),
            floor: Some(3),
            area_sqm: Some(58.0),
            max_guests: Some(4),
            last_serviced_on: NaiveDate::from_ymd_opt(2025, 7, 30),
            status: Some(UnitStatus::Maintenance),
            comment: Some("AC compressor replacement".into()),
            ..Default::default()
        },
        UnitDto {
            number: "G01".into(),
            max_guests: Some(2),
            status: Some(UnitStatus::OutOfService),
            ..Default::default()
        },
    ]
}

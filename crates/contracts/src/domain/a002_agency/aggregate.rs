use crate::domain::common::{BaseRecord, RecordEntity, RecordId, RecordMetadata};
use crate::enums::AgencyStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgencyId(pub i64);

impl AgencyId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl RecordId for AgencyId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(AgencyId::new)
    }
}

// ============================================================================
// Record
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    #[serde(flatten)]
    pub base: BaseRecord<AgencyId>,

    pub name: String,

    #[serde(rename = "contactPerson")]
    pub contact_person: Option<String>,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    /// Commercial license number the agency operates under
    #[serde(rename = "licenseNumber", default)]
    pub license_number: String,

    pub country: Option<String>,

    /// First day of the current contract, when one is on file
    #[serde(rename = "contractStart")]
    pub contract_start: Option<NaiveDate>,

    #[serde(default)]
    pub status: AgencyStatus,
}

impl Agency {
    pub fn new_for_insert(id: AgencyId, dto: &AgencyDto) -> Self {
        let mut agency = Self {
            base: BaseRecord::new(id),
            name: dto.name.clone(),
            contact_person: dto.contact_person.clone(),
            email: dto.email.clone().unwrap_or_default(),
            phone: dto.phone.clone().unwrap_or_default(),
            license_number: dto.license_number.clone().unwrap_or_default(),
            country: dto.country.clone(),
            contract_start: dto.contract_start,
            status: dto.status.unwrap_or_default(),
        };
        agency.base.comment = dto.comment.clone();
        agency
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    /// Merge an edit patch; identity is never taken from the patch.
    pub fn update(&mut self, dto: &AgencyDto) {
        self.name = dto.name.clone();
        self.contact_person = dto.contact_person.clone();
        self.email = dto.email.clone().unwrap_or_default();
        self.phone = dto.phone.clone().unwrap_or_default();
        self.license_number = dto.license_number.clone().unwrap_or_default();
        self.country = dto.country.clone();
        self.contract_start = dto.contract_start;
        if let Some(status) = dto.status {
            self.status = status;
        }
        self.base.comment = dto.comment.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Agency name must not be empty".into());
        }
        if self.license_number.trim().is_empty() {
            return Err("License number must not be empty".into());
        }
        if !self.email.is_empty() && !self.email.contains('@') {
            return Err("Email address is not valid".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl RecordEntity for Agency {
    type Id = AgencyId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn metadata(&self) -> &RecordMetadata {
        &self.base.metadata
    }

    fn record_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "agency"
    }

    fn element_name() -> &'static str {
        "Agency"
    }

    fn list_name() -> &'static str {
        "Agencies"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AgencyDto {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "contactPerson")]
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "licenseNumber")]
    pub license_number: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "contractStart")]
    pub contract_start: Option<NaiveDate>,
    pub status: Option<AgencyStatus>,
    pub comment: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_license_number() {
        let dto = AgencyDto {
            name: "Almosafer".to_string(),
            ..Default::default()
        };
        let agency = Agency::new_for_insert(AgencyId::new(1), &dto);
        assert!(agency.validate().is_err());
    }
}

use crate::domain::common::{BaseRecord, RecordEntity, RecordId, RecordMetadata};
use crate::enums::GuestStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuestId(pub i64);

impl GuestId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl RecordId for GuestId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(GuestId::new)
    }
}

// ============================================================================
// Record
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    #[serde(flatten)]
    pub base: BaseRecord<GuestId>,

    #[serde(rename = "fullName")]
    pub full_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    /// Passport or national identity number
    #[serde(rename = "nationalId", default)]
    pub national_id: String,

    pub nationality: Option<String>,

    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<NaiveDate>,

    #[serde(default)]
    pub status: GuestStatus,
}

impl Guest {
    pub fn new_for_insert(id: GuestId, dto: &GuestDto) -> Self {
        let mut guest = Self {
            base: BaseRecord::new(id),
            full_name: dto.full_name.clone(),
            email: dto.email.clone().unwrap_or_default(),
            phone: dto.phone.clone().unwrap_or_default(),
            national_id: dto.national_id.clone().unwrap_or_default(),
            nationality: dto.nationality.clone(),
            date_of_birth: dto.date_of_birth,
            status: dto.status.unwrap_or_default(),
        };
        guest.base.comment = dto.comment.clone();
        guest
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    /// Merge an edit patch; identity is never taken from the patch.
    pub fn update(&mut self, dto: &GuestDto) {
        self.full_name = dto.full_name.clone();
        self.email = dto.email.clone().unwrap_or_default();
        self.phone = dto.phone.clone().unwrap_or_default();
        self.national_id = dto.national_id.clone().unwrap_or_default();
        self.nationality = dto.nationality.clone();
        self.date_of_birth = dto.date_of_birth;
        if let Some(status) = dto.status {
            self.status = status;
        }
        self.base.comment = dto.comment.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("Full name must not be empty".into());
        }
        if self.national_id.trim().is_empty() {
            return Err("National id must not be empty".into());
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

impl RecordEntity for Guest {
    type Id = GuestId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn metadata(&self) -> &RecordMetadata {
        &self.base.metadata
    }

    fn record_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "guest"
    }

    fn element_name() -> &'static str {
        "Guest"
    }

    fn list_name() -> &'static str {
        "Guests"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GuestDto {
    pub id: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "nationalId")]
    pub national_id: Option<String>,
    pub nationality: Option<String>,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<NaiveDate>,
    pub status: Option<GuestStatus>,
    pub comment: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

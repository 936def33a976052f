pub mod agency_status;
pub mod guest_status;
pub mod unit_status;

pub use agency_status::AgencyStatus;
pub use guest_status::GuestStatus;
pub use unit_status::UnitStatus;

pub mod common;

pub mod a001_guest;
pub mod a002_agency;
pub mod a003_unit;

pub mod comparators;
pub mod dialog;
pub mod list_utils;
pub mod query;
pub mod screen;

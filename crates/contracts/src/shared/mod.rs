pub mod error;
pub mod query;

pub use error::DataError;
pub use query::{ListPage, ListQuery, SortDirection};

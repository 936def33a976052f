//! List utilities shared by every management screen (search, sort, display)

use crate::shared::comparators::{compare_values_directed, FieldValue};
use backend::shared::data::ManagedRecord;
use contracts::shared::SortDirection;

/// Trait for record types that support typed column sorting
pub trait Sortable {
    /// The sortable columns of this record type
    type Field: Copy + Eq + std::fmt::Debug;

    /// Project the value of the given column for comparison
    fn field_value(&self, field: Self::Field) -> FieldValue<'_>;
}

/// Filter a list by a search term.
///
/// Case-insensitive substring match over the record type's designated
/// searchable fields; an empty term keeps everything.
pub fn filter_list<T: ManagedRecord>(items: &[T], filter: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_search(filter))
        .cloned()
        .collect()
}

/// Stable-sort a list by the given column.
///
/// Records missing the column value always end up last, under either
/// direction; ties keep their incoming order.
pub fn sort_list<T: Sortable>(items: &mut [T], field: T::Field, direction: SortDirection) {
    items.sort_by(|a, b| {
        compare_values_directed(&a.field_value(field), &b.field_value(field), direction)
    });
}

/// Timestamp rendering used by the row projections
pub fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Sort indicator for a header cell
pub fn get_sort_indicator<F: PartialEq>(
    current: Option<(F, SortDirection)>,
    field: F,
) -> &'static str {
    match current {
        Some((active, direction)) if active == field => {
            if direction.is_ascending() {
                " \u{25b2}"
            } else {
                " \u{25bc}"
            }
        }
        _ => " \u{21c5}",
    }
}

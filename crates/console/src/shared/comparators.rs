use chrono::{DateTime, NaiveDate, Utc};
use contracts::shared::SortDirection;
use std::cmp::Ordering;

/// Typed projection of one sortable column value.
///
/// Sort keys are enum-typed per record type, so a given key always projects
/// the same kind; the `Missing` arm covers nullable domain fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Missing,
}

impl FieldValue<'_> {
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

fn compare_defined(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Text(x), FieldValue::Text(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        (FieldValue::Number(x), FieldValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Date(x), FieldValue::Date(y)) => x.cmp(y),
        (FieldValue::DateTime(x), FieldValue::DateTime(y)) => x.cmp(y),
        // mismatched kinds; unreachable under typed sort keys
        _ => Ordering::Equal,
    }
}

/// Raw comparison: missing sorts after any defined value.
pub fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a.is_missing(), b.is_missing()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => compare_defined(a, b),
    }
}

/// Direction-aware comparison.
///
/// The inversion applies to the defined-vs-defined result only; records
/// missing the sort field sink to the end under either direction.
pub fn compare_values_directed(
    a: &FieldValue<'_>,
    b: &FieldValue<'_>,
    direction: SortDirection,
) -> Ordering {
    match (a.is_missing(), b.is_missing()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = compare_defined(a, b);
            if direction.is_ascending() {
                ordering
            } else {
                ordering.reverse()
            }
        }
    }
}

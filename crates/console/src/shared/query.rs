use backend::shared::data::ManagedRecord;
use contracts::shared::SortDirection;

use super::list_utils::{filter_list, sort_list, Sortable};

/// Query parameters of one list screen.
///
/// Pages are 1-based. Every change that can move a record across page
/// boundaries — search term, sort, page size — resets the page to 1 so the
/// screen never silently lands on an out-of-range page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQueryState<F> {
    search_term: String,
    sort: Option<(F, SortDirection)>,
    page: usize,
    page_size: usize,
}

impl<F: Copy + Eq> ListQueryState<F> {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> Option<(F, SortDirection)> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    /// Header-click semantics: a click on the active sort column flips the
    /// direction, a click on any other column starts ascending.
    pub fn toggle_sort(&mut self, field: F) {
        self.sort = match self.sort {
            Some((active, direction)) if active == field => Some((field, direction.toggled())),
            _ => Some((field, SortDirection::Ascending)),
        };
        self.page = 1;
    }

    pub fn set_sort(&mut self, field: F, direction: SortDirection) {
        self.sort = Some((field, direction));
        self.page = 1;
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.page = 1;
    }

    /// The pipeline does not clamp; callers clamp via
    /// [`PageResult::display_pages`] after the collection changes.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            return;
        }
        self.page_size = page_size;
        self.page = 1;
    }
}

/// One derived page, ready for the view adapter
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub page_items: Vec<T>,
    /// Collection size after filtering, before pagination
    pub total_count: usize,
    /// `ceil(total_count / page_size)`; 0 for an empty collection
    pub total_pages: usize,
}

impl<T> PageResult<T> {
    /// Page count for display: an empty collection still shows one page
    pub fn display_pages(&self) -> usize {
        self.total_pages.max(1)
    }
}

/// The list pipeline: filter, stable sort, page slice.
///
/// Pure function of its inputs — reapplying with the same records and query
/// state yields the same page. A page past the end produces an empty slice,
/// not an error.
pub fn apply<T>(records: &[T], state: &ListQueryState<T::Field>) -> PageResult<T>
where
    T: ManagedRecord + Sortable,
{
    let mut items = filter_list(records, &state.search_term);
    if let Some((field, direction)) = state.sort {
        sort_list(&mut items, field, direction);
    }

    let total_count = items.len();
    let total_pages = total_count.div_ceil(state.page_size);

    let start = (state.page - 1) * state.page_size;
    let page_items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(state.page_size)
        .collect();

    PageResult {
        page_items,
        total_count,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_guest::aggregate::{Guest, GuestDto, GuestId};

    use crate::domain::a001_guest::list::GuestField;
    use backend::shared::data::ManagedRecord;

    fn guest(id: i64, name: &str) -> Guest {
        let dto = GuestDto {
            full_name: name.to_string(),
            national_id: Some(format!("N-{id}")),
            ..Default::default()
        };
        Guest::new_for_insert(GuestId::new(id), &dto)
    }

    fn twenty_five() -> Vec<Guest> {
        (1..=25).map(|i| guest(i, &format!("Guest {i:02}"))).collect()
    }

    fn state(page: usize, page_size: usize) -> ListQueryState<GuestField> {
        let mut s = ListQueryState::new(page_size);
        s.set_page(page);
        s
    }

    #[test]
    fn test_pagination_bounds() {
        let records = twenty_five();
        let result = apply(&records, &state(1, 10));
        assert_eq!(result.total_count, 25);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.page_items.len(), 10);

        let last = apply(&records, &state(3, 10));
        assert_eq!(last.page_items.len(), 5);

        let beyond = apply(&records, &state(4, 10));
        assert!(beyond.page_items.is_empty());
        assert_eq!(beyond.total_count, 25);
    }

    #[test]
    fn test_empty_collection_is_one_display_page() {
        let result = apply(&Vec::<Guest>::new(), &state(1, 10));
        assert_eq!(result.total_pages, 0);
        assert_eq!(result.display_pages(), 1);
    }

    #[test]
    fn test_unsorted_preserves_insertion_order() {
        let records = vec![guest(1, "Zara"), guest(2, "Adam"), guest(3, "Mona")];
        let result = apply(&records, &state(1, 10));
        let names: Vec<&str> = result
            .page_items
            .iter()
            .map(|g| g.full_name.as_str())
            .collect();
        assert_eq!(names, vec!["Zara", "Adam", "Mona"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let records = vec![guest(1, "Almosafer"), guest(2, "Booking.com")];
        let mut s = state(1, 10);
        s.set_search_term("BOOK");
        let result = apply(&records, &s);
        assert_eq!(result.total_count, 1);
        assert_eq!(result.page_items[0].full_name, "Booking.com");

        s.set_search_term("");
        assert_eq!(apply(&records, &s).total_count, 2);
    }

    #[test]
    fn test_filter_covers_every_designated_field() {
        let mut with_phone = guest(1, "Guest A");
        with_phone.phone = "+966 50 777 1234".to_string();
        let records = vec![with_phone, guest(2, "Guest B")];
        let mut s = state(1, 10);
        s.set_search_term("777 12");
        let result = apply(&records, &s);
        assert_eq!(result.total_count, 1);
        assert!(result.page_items[0].matches_search("777 12"));
    }

    #[test]
    fn test_pipeline_is_pure_and_idempotent() {
        let records = twenty_five();
        let mut s = state(2, 7);
        s.toggle_sort(GuestField::FullName);
        let first = apply(&records, &s);
        let second = apply(&records, &s);
        assert_eq!(first, second);
        // input untouched
        assert_eq!(records.len(), 25);
        assert_eq!(records[0].full_name, "Guest 01");
    }

    #[test]
    fn test_query_changes_reset_page() {
        let mut s = state(3, 10);
        s.set_search_term("x");
        assert_eq!(s.page(), 1);

        s.set_page(3);
        s.toggle_sort(GuestField::FullName);
        assert_eq!(s.page(), 1);

        s.set_page(3);
        s.set_page_size(25);
        assert_eq!(s.page(), 1);

        s.set_page(2);
        s.set_page_size(0); // ignored
        assert_eq!(s.page_size(), 25);
        assert_eq!(s.page(), 2);
    }

    #[test]
    fn test_toggle_sort_flips_direction_on_active_column() {
        let mut s: ListQueryState<GuestField> = ListQueryState::new(10);
        s.toggle_sort(GuestField::FullName);
        assert_eq!(
            s.sort(),
            Some((GuestField::FullName, SortDirection::Ascending))
        );
        s.toggle_sort(GuestField::FullName);
        assert_eq!(
            s.sort(),
            Some((GuestField::FullName, SortDirection::Descending))
        );
        s.toggle_sort(GuestField::Phone);
        assert_eq!(s.sort(), Some((GuestField::Phone, SortDirection::Ascending)));
    }
}

use serde::{Deserialize, Serialize};

use crate::{
    filter::FilterState,
    sort::{SortDirection, SortState},
};

/// The full user-interaction state of the grid.
///
/// Derived outputs are pure functions of `(Table, GridState)`; transitions
/// here never touch the row store. Any filter, search or sort change
/// resets the page index to 0, so a narrowed result set is never viewed
/// through a stale page number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridState {
    pub filters: FilterState,
    pub search: String,
    pub sort: SortState,
    pub page: usize,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one column's allowed filter values.
    pub fn set_filter(&mut self, column: impl Into<String>, values: Vec<String>) {
        self.filters.set(column, values);
        self.page = 0;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 0;
    }

    /// Cycle the sort header toggle on `column`.
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort.toggle(column);
        self.page = 0;
    }

    /// Set the sort column and direction together.
    pub fn set_sort(&mut self, column: Option<String>, direction: SortDirection) {
        self.sort = SortState { column, direction };
        self.page = 0;
    }

    /// "Clear All Filters": drop every filter and the search term, back to
    /// the first page. The sort toggle is left alone.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.search.clear();
        self.page = 0;
    }

    /// Move to the next page; a no-op on the last page (and on the single
    /// empty page of an empty result set).
    pub fn next_page(&mut self, total_pages: usize) {
        if self.page + 1 < total_pages {
            self.page += 1;
        }
    }

    /// Move to the previous page; a no-op on the first.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Request a page directly. The value is clamped at derivation time,
    /// so stale indices from a shrunken result set cannot fail.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }
}

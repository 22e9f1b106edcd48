//! Caller-owned list state.
//!
//! The engine is stateless; a list screen keeps the search box, filter
//! selections and current page in a [`ListState`] and turns it into a
//! [`ListQuery`] whenever something changes.

use std::collections::BTreeMap;

use farmdesk_query::{ListQuery, Page};

/// Search, filter and page state of one list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    search: String,
    filters: BTreeMap<String, String>,
    page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            page: 1,
        }
    }
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the selected value for a filter, or `None` if never set.
    ///
    /// An unset filter behaves like the engine's wildcard, whatever that is
    /// configured to be.
    pub fn filter(&self, field: &str) -> Option<&str> {
        self.filters.get(field).map(String::as_str)
    }

    /// Replaces the search term and returns to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Selects a filter value and returns to the first page.
    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.filters.insert(field.into(), value.into());
        self.page = 1;
    }

    /// Clears search and filters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Jumps to a page. Zero is treated as the first page.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Moves back one page, stopping at the first.
    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Moves forward one page, stopping at the last page of `page`.
    pub fn next_page<T>(&mut self, current: &Page<T>) {
        let last = current.total_pages.max(1);
        self.page = (self.page + 1).min(last);
    }

    /// Builds the query for the current state.
    pub fn to_query(&self, page_size: usize) -> ListQuery {
        let mut query = ListQuery::new()
            .search(self.search.clone())
            .page(self.page)
            .page_size(page_size);
        for (field, value) in &self.filters {
            query = query.filter(field.clone(), value.clone());
        }
        query
    }
}

//! List query builder.
//!
//! A [`ListQuery`] carries what the user asked for: a search term, a set of
//! filter selections and a page request. How those are interpreted (which
//! fields are searched, how each filter compares) belongs to the
//! [`ListEngine`](crate::ListEngine).

use std::collections::BTreeMap;

use crate::error::{QueryError, Result};

/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// A search, filter and page request.
///
/// # Example
///
/// ```
/// use farmdesk_query::ListQuery;
///
/// let query = ListQuery::new()
///     .search("kar")
///     .filter("role", "worker")
///     .page(1)
///     .page_size(8);
///
/// assert_eq!(query.search_term(), "kar");
/// assert_eq!(query.filter_value("role"), Some("worker"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListQuery {
    search: String,
    filters: BTreeMap<String, String>,
    page: usize,
    page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    /// Creates a query for the first page with no search and no filters.
    pub fn new() -> Self {
        ListQuery::default()
    }

    /// Sets the free-text search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Selects `expected` for the filter on `field`.
    ///
    /// Selecting the same field twice keeps the last value.
    pub fn filter(mut self, field: impl Into<String>, expected: impl Into<String>) -> Self {
        self.filters.insert(field.into(), expected.into());
        self
    }

    /// Sets the 1-based page number.
    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Sets the number of records per page.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Returns the search term.
    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// Returns the filter selections, ordered by field name.
    pub fn filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the selected value for a filter field, if any.
    pub fn filter_value(&self, field: &str) -> Option<&str> {
        self.filters.get(field).map(String::as_str)
    }

    /// Returns the page number.
    pub fn get_page(&self) -> usize {
        self.page
    }

    /// Returns the page size.
    pub fn get_page_size(&self) -> usize {
        self.page_size
    }

    /// Checks the page request.
    ///
    /// Both the page number and the page size must be at least one.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(QueryError::invalid("page_size", self.page_size));
        }
        if self.page == 0 {
            return Err(QueryError::invalid("page", self.page));
        }
        Ok(())
    }

    /// Index of the first record on the requested page within the matches.
    pub(crate) fn start_index(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

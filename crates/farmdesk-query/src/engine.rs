//! The list query engine.
//!
//! A [`ListEngine`] describes one list view: which fields free-text search
//! looks at, how each filter field compares, and which filter value means
//! "no filter". It holds no state between calls; every query runs the full
//! pipeline over the records it is given:
//!
//! ```text
//! records ──search──▶ ──filters──▶ matches ──slice(page)──▶ Page
//! ```
//!
//! Records are never reordered or mutated.

use std::collections::HashMap;

use crate::comparator::{Comparator, Matcher};
use crate::error::Result;
use crate::page::Page;
use crate::query::ListQuery;
use crate::value::Value;

/// Filter value that disables a filter.
pub const WILDCARD: &str = "all";

/// Configuration for searching, filtering and paginating one kind of record.
///
/// # Example
///
/// ```
/// use farmdesk_query::{Comparator, ListEngine, ListQuery, Value};
///
/// struct User {
///     name: &'static str,
///     email: &'static str,
///     role: &'static str,
/// }
///
/// fn accessor<'a>(user: &'a User, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::Text(user.name),
///         "email" => Value::Text(user.email),
///         "role" => Value::Text(user.role),
///         _ => Value::None,
///     }
/// }
///
/// let users = vec![
///     User { name: "Ahmed Khalil", email: "ahmed@email.com", role: "Farm Owner" },
///     User { name: "Karim Zidane", email: "karim@email.com", role: "Worker" },
/// ];
///
/// let engine = ListEngine::new()
///     .search_fields(["name", "email"])
///     .filter_with("role", Comparator::ContainsIgnoreCase);
///
/// let query = ListQuery::new().search("kar").filter("role", "worker");
/// let page = engine.query(&users, &query, accessor).unwrap();
///
/// assert_eq!(page.total_matched, 1);
/// assert_eq!(page.items[0].name, "Karim Zidane");
/// ```
#[derive(Debug, Clone)]
pub struct ListEngine {
    search_fields: Vec<String>,
    comparators: HashMap<String, Comparator>,
    wildcard: String,
}

impl Default for ListEngine {
    fn default() -> Self {
        Self {
            search_fields: Vec::new(),
            comparators: HashMap::new(),
            wildcard: WILDCARD.to_string(),
        }
    }
}

impl ListEngine {
    /// Creates an engine with no searchable fields.
    ///
    /// Without searchable fields a non-empty search term matches nothing.
    pub fn new() -> Self {
        ListEngine::default()
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Adds a field to free-text search.
    pub fn search_field(mut self, field: impl Into<String>) -> Self {
        self.search_fields.push(field.into());
        self
    }

    /// Adds several fields to free-text search.
    pub fn search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Sets the comparator used for filters on `field`.
    ///
    /// Fields without a configured comparator use [`Comparator::Exact`].
    pub fn filter_with(mut self, field: impl Into<String>, comparator: Comparator) -> Self {
        self.comparators.insert(field.into(), comparator);
        self
    }

    /// Replaces the wildcard filter value (default `"all"`).
    pub fn wildcard(mut self, sentinel: impl Into<String>) -> Self {
        self.wildcard = sentinel.into();
        self
    }

    /// Returns the searchable fields.
    pub fn searchable_fields(&self) -> &[String] {
        &self.search_fields
    }

    /// Returns the comparator in effect for a filter field.
    pub fn comparator_for(&self, field: &str) -> Comparator {
        self.comparators.get(field).copied().unwrap_or_default()
    }

    /// Returns the wildcard filter value.
    pub fn wildcard_value(&self) -> &str {
        &self.wildcard
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Compiles the search and filter part of a query.
    ///
    /// Useful when the same query is checked against records one at a time.
    /// Pagination is not validated here.
    pub fn prepare<'q>(&'q self, query: &'q ListQuery) -> Result<Prepared<'q>> {
        let term = query.search_term();
        let needle = (!term.is_empty()).then(|| term.to_lowercase());

        let mut filters = Vec::new();
        for (field, expected) in query.filters() {
            if expected == self.wildcard {
                continue;
            }
            let matcher = self.comparator_for(field).compile(expected)?;
            filters.push((field, matcher));
        }

        Ok(Prepared {
            needle,
            search_fields: &self.search_fields,
            filters,
        })
    }

    /// Tests whether a single record passes search and filters.
    pub fn matches<T, F>(&self, item: &T, query: &ListQuery, accessor: F) -> Result<bool>
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        Ok(self.prepare(query)?.matches(item, accessor))
    }

    /// Counts the records passing search and filters, ignoring pagination.
    pub fn count<T, F>(&self, records: &[T], query: &ListQuery, accessor: F) -> Result<usize>
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let prepared = self.prepare(query)?;
        Ok(records
            .iter()
            .filter(|item| prepared.matches(*item, &accessor))
            .count())
    }

    /// Returns every record passing search and filters, ignoring pagination.
    pub fn filter<'a, T, F>(
        &self,
        records: &'a [T],
        query: &ListQuery,
        accessor: F,
    ) -> Result<Vec<&'a T>>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let prepared = self.prepare(query)?;
        Ok(records
            .iter()
            .filter(|item| prepared.matches(*item, &accessor))
            .collect())
    }

    /// Runs a query, returning the requested page of matching records.
    ///
    /// Fails with [`QueryError::InvalidQuery`] when the page number or page
    /// size is zero. A page past the end is not an error; it comes back with
    /// no items and the real totals.
    ///
    /// [`QueryError::InvalidQuery`]: crate::QueryError::InvalidQuery
    pub fn query<'a, T, F>(
        &self,
        records: &'a [T],
        query: &ListQuery,
        accessor: F,
    ) -> Result<Page<&'a T>>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        query.validate()?;
        let prepared = self.prepare(query)?;

        let page_size = query.get_page_size();
        let start = query.start_index();
        let end = start.saturating_add(page_size);

        let mut items = Vec::with_capacity(page_size.min(records.len()));
        let mut total_matched = 0;
        for item in records {
            if !prepared.matches(item, &accessor) {
                continue;
            }
            if (start..end).contains(&total_matched) {
                items.push(item);
            }
            total_matched += 1;
        }

        let page = Page::new(items, total_matched, query.get_page(), page_size);
        tracing::trace!(
            total_matched = page.total_matched,
            page = page.page,
            total_pages = page.total_pages,
            items = page.items.len(),
            "list query"
        );
        Ok(page)
    }

    /// Runs a query and clones the records on the returned page.
    pub fn query_cloned<T, F>(
        &self,
        records: &[T],
        query: &ListQuery,
        accessor: F,
    ) -> Result<Page<T>>
    where
        T: Clone,
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        Ok(self.query(records, query, accessor)?.cloned())
    }
}

/// Search and filter predicates compiled from a [`ListQuery`].
#[derive(Debug)]
pub struct Prepared<'q> {
    needle: Option<String>,
    search_fields: &'q [String],
    filters: Vec<(&'q str, Matcher)>,
}

impl Prepared<'_> {
    /// Tests whether a record passes the search term and every active filter.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.matches_search(item, &accessor)
            && self
                .filters
                .iter()
                .all(|(field, matcher)| matcher.matches(&accessor(item, *field)))
    }

    fn matches_search<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let Some(needle) = &self.needle else {
            return true;
        };

        self.search_fields.iter().any(|field| {
            accessor(item, field.as_str())
                .string_form()
                .is_some_and(|text| text.to_lowercase().contains(needle.as_str()))
        })
    }

    /// Returns `true` if this query neither searches nor filters.
    pub fn is_unrestricted(&self) -> bool {
        self.needle.is_none() && self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;
    use crate::QueryError;

    #[derive(Debug, Clone, PartialEq)]
    struct Farm {
        name: String,
        owner: String,
        status: &'static str,
        fields: u32,
    }

    fn accessor<'a>(farm: &'a Farm, field: &str) -> Value<'a> {
        match field {
            "name" => Value::Text(&farm.name),
            "owner" => Value::Text(&farm.owner),
            "status" => Value::Text(farm.status),
            "fields" => Value::Number(Number::U64(farm.fields as u64)),
            _ => Value::None,
        }
    }

    fn farm(name: &str, owner: &str, status: &'static str, fields: u32) -> Farm {
        Farm {
            name: name.to_string(),
            owner: owner.to_string(),
            status,
            fields,
        }
    }

    fn sample_farms() -> Vec<Farm> {
        vec![
            farm("Green Valley Farm", "Ahmed Khalil", "active", 12),
            farm("Sunrise Farms", "Sara Mansouri", "active", 8),
            farm("Golden Harvest", "Ali Benali", "active", 15),
            farm("Fresh Fields", "Fatima Zerrouk", "inactive", 6),
            farm("Organic Paradise", "Mohamed Amrani", "active", 10),
            farm("Nature's Bounty", "Karim Zidane", "active", 9),
        ]
    }

    fn farms_engine() -> ListEngine {
        ListEngine::new()
            .search_fields(["name", "owner"])
            .filter_with("status", Comparator::Exact)
    }

    fn names<'a>(page: &Page<&'a Farm>) -> Vec<&'a str> {
        page.items.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let farms = sample_farms();
        let page = farms_engine()
            .query(&farms, &ListQuery::new(), accessor)
            .unwrap();

        assert_eq!(page.total_matched, 6);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 6);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let farms = sample_farms();
        let engine = farms_engine();

        let by_name = engine
            .query(&farms, &ListQuery::new().search("GOLDEN"), accessor)
            .unwrap();
        assert_eq!(names(&by_name), vec!["Golden Harvest"]);

        let by_owner = engine
            .query(&farms, &ListQuery::new().search("zerrouk"), accessor)
            .unwrap();
        assert_eq!(names(&by_owner), vec!["Fresh Fields"]);
    }

    #[test]
    fn search_ignores_fields_not_marked_searchable() {
        let farms = sample_farms();
        let page = farms_engine()
            .query(&farms, &ListQuery::new().search("inactive"), accessor)
            .unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn search_over_numeric_field() {
        let farms = sample_farms();
        let engine = ListEngine::new().search_field("fields");
        let page = engine
            .query(&farms, &ListQuery::new().search("1"), accessor)
            .unwrap();
        assert_eq!(
            names(&page),
            vec!["Green Valley Farm", "Golden Harvest", "Organic Paradise"]
        );
    }

    #[test]
    fn status_filter_is_exact() {
        let farms = sample_farms();
        let engine = farms_engine();

        let inactive = engine
            .query(&farms, &ListQuery::new().filter("status", "inactive"), accessor)
            .unwrap();
        assert_eq!(names(&inactive), vec!["Fresh Fields"]);

        let shouting = engine
            .query(&farms, &ListQuery::new().filter("status", "ACTIVE"), accessor)
            .unwrap();
        assert!(shouting.is_empty());
    }

    #[test]
    fn wildcard_disables_filter() {
        let farms = sample_farms();
        let page = farms_engine()
            .query(&farms, &ListQuery::new().filter("status", "all"), accessor)
            .unwrap();
        assert_eq!(page.total_matched, 6);
    }

    #[test]
    fn custom_wildcard() {
        let farms = sample_farms();
        let engine = farms_engine().wildcard("*");

        let page = engine
            .query(&farms, &ListQuery::new().filter("status", "*"), accessor)
            .unwrap();
        assert_eq!(page.total_matched, 6);

        let page = engine
            .query(&farms, &ListQuery::new().filter("status", "all"), accessor)
            .unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn filter_on_unknown_field_matches_nothing() {
        let farms = sample_farms();
        let page = farms_engine()
            .query(&farms, &ListQuery::new().filter("region", "north"), accessor)
            .unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn search_and_filter_combine() {
        let farms = sample_farms();
        let query = ListQuery::new().search("f").filter("status", "active");
        let page = farms_engine().query(&farms, &query, accessor).unwrap();

        // "Fresh Fields" matches the search but is inactive.
        assert_eq!(names(&page), vec!["Green Valley Farm", "Sunrise Farms"]);
    }

    #[test]
    fn pagination_slices_matches() {
        let farms = sample_farms();
        let engine = farms_engine();

        let first = engine
            .query(&farms, &ListQuery::new().page_size(4), accessor)
            .unwrap();
        assert_eq!(first.items.len(), 4);
        assert_eq!(first.total_pages, 2);

        let second = engine
            .query(&farms, &ListQuery::new().page(2).page_size(4), accessor)
            .unwrap();
        assert_eq!(names(&second), vec!["Organic Paradise", "Nature's Bounty"]);
        assert_eq!(second.total_matched, 6);
    }

    #[test]
    fn page_past_end_is_empty_not_error() {
        let farms = sample_farms();
        let page = farms_engine()
            .query(&farms, &ListQuery::new().page(5).page_size(4), accessor)
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_matched, 6);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page, 5);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let farms = sample_farms();
        let err = farms_engine()
            .query(&farms, &ListQuery::new().page_size(0), accessor)
            .unwrap_err();
        assert!(err.is_invalid_query());
    }

    #[test]
    fn zero_page_is_rejected_even_without_records() {
        let farms: Vec<Farm> = Vec::new();
        let err = farms_engine()
            .query(&farms, &ListQuery::new().page(0), accessor)
            .unwrap_err();
        assert!(err.is_invalid_query());
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let farms = sample_farms();
        let engine = ListEngine::new().filter_with("name", Comparator::Pattern);
        let err = engine
            .query(&farms, &ListQuery::new().filter("name", "[unclosed"), accessor)
            .unwrap_err();
        assert!(matches!(err, QueryError::InvalidPattern(_)));
    }

    #[test]
    fn pattern_filter() {
        let farms = sample_farms();
        let engine = ListEngine::new().filter_with("name", Comparator::Pattern);
        let page = engine
            .query(&farms, &ListQuery::new().filter("name", r"Farms?$"), accessor)
            .unwrap();
        assert_eq!(names(&page), vec!["Green Valley Farm", "Sunrise Farms"]);
    }

    #[test]
    fn count_and_filter_ignore_pagination() {
        let farms = sample_farms();
        let engine = farms_engine();
        let query = ListQuery::new()
            .filter("status", "active")
            .page(9)
            .page_size(1);

        assert_eq!(engine.count(&farms, &query, accessor).unwrap(), 5);
        assert_eq!(engine.filter(&farms, &query, accessor).unwrap().len(), 5);
    }

    #[test]
    fn matches_single_record() {
        let farms = sample_farms();
        let engine = farms_engine();
        let query = ListQuery::new().search("bounty");

        assert!(engine.matches(&farms[5], &query, accessor).unwrap());
        assert!(!engine.matches(&farms[0], &query, accessor).unwrap());
    }

    #[test]
    fn query_cloned_owns_items() {
        let farms = sample_farms();
        let page: Page<Farm> = farms_engine()
            .query_cloned(&farms, &ListQuery::new().search("sunrise"), accessor)
            .unwrap();
        assert_eq!(page.items, vec![farms[1].clone()]);
    }

    #[test]
    fn prepared_skips_wildcard_filters() {
        let engine = farms_engine();
        let query = ListQuery::new().filter("status", "all");
        assert!(engine.prepare(&query).unwrap().is_unrestricted());

        let query = ListQuery::new().search("x");
        assert!(!engine.prepare(&query).unwrap().is_unrestricted());
    }

    #[test]
    fn comparator_defaults_to_exact() {
        let engine = farms_engine().filter_with("owner", Comparator::ContainsIgnoreCase);
        assert_eq!(engine.comparator_for("owner"), Comparator::ContainsIgnoreCase);
        assert_eq!(engine.comparator_for("status"), Comparator::Exact);
        assert_eq!(engine.comparator_for("other"), Comparator::Exact);
        assert_eq!(engine.wildcard_value(), "all");
        assert_eq!(engine.searchable_fields(), ["name", "owner"]);
    }
}

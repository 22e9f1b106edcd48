//! Property-based tests for the list engine using proptest.

use farmdesk_query::{Comparator, ListEngine, ListQuery, Number, Value};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: usize,
    name: String,
    status: &'static str,
    score: i64,
}

fn row_accessor<'a>(row: &'a Row, field: &str) -> Value<'a> {
    match field {
        "name" => Value::Text(&row.name),
        "status" => Value::Text(row.status),
        "score" => Value::Number(Number::I64(row.score)),
        _ => Value::None,
    }
}

fn rows_strategy(max: usize) -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        (
            "[a-zA-Z]{1,10}",
            prop_oneof![Just("active"), Just("inactive")],
            any::<i64>(),
        ),
        0..max,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(id, (name, status, score))| Row {
                id,
                name,
                status,
                score,
            })
            .collect()
    })
}

fn engine() -> ListEngine {
    ListEngine::new()
        .search_field("name")
        .filter_with("status", Comparator::Exact)
}

fn status_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("all"), Just("active"), Just("inactive")]
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// An unrestricted query counts every record.
    #[test]
    fn empty_query_counts_everything(
        rows in rows_strategy(60),
        page_size in 1usize..20,
    ) {
        let query = ListQuery::new().page_size(page_size);
        let page = engine().query(&rows, &query, row_accessor).unwrap();
        prop_assert_eq!(page.total_matched, rows.len());
    }

    /// A page never holds more than page_size or total_matched records.
    #[test]
    fn page_is_bounded(
        rows in rows_strategy(60),
        term in "[a-z]{0,2}",
        status in status_strategy(),
        page in 1usize..10,
        page_size in 1usize..20,
    ) {
        let query = ListQuery::new()
            .search(term)
            .filter("status", status)
            .page(page)
            .page_size(page_size);
        let result = engine().query(&rows, &query, row_accessor).unwrap();

        prop_assert!(result.items.len() <= page_size);
        prop_assert!(result.items.len() <= result.total_matched);
    }

    /// total_pages is zero exactly when nothing matched, else the ceiling.
    #[test]
    fn total_pages_is_ceiling(
        rows in rows_strategy(60),
        status in status_strategy(),
        page_size in 1usize..20,
    ) {
        let query = ListQuery::new().filter("status", status).page_size(page_size);
        let result = engine().query(&rows, &query, row_accessor).unwrap();

        if result.total_matched == 0 {
            prop_assert_eq!(result.total_pages, 0);
        } else {
            let expected = (result.total_matched + page_size - 1) / page_size;
            prop_assert_eq!(result.total_pages, expected);
        }
    }

    /// Running the same query twice gives the same page.
    #[test]
    fn query_is_idempotent(
        rows in rows_strategy(40),
        term in "[a-z]{0,2}",
        page in 1usize..5,
    ) {
        let query = ListQuery::new().search(term).page(page).page_size(3);
        let first = engine().query(&rows, &query, row_accessor).unwrap();
        let second = engine().query(&rows, &query, row_accessor).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Items keep their relative order from the source.
    #[test]
    fn items_preserve_source_order(
        rows in rows_strategy(60),
        term in "[a-z]{0,1}",
        page_size in 1usize..60,
    ) {
        let query = ListQuery::new().search(term).page_size(page_size);
        let result = engine().query(&rows, &query, row_accessor).unwrap();

        for pair in result.items.windows(2) {
            prop_assert!(pair[0].id < pair[1].id);
        }
    }

    /// Concatenating every page reproduces the unpaginated matches.
    #[test]
    fn pages_partition_matches(
        rows in rows_strategy(60),
        status in status_strategy(),
        page_size in 1usize..10,
    ) {
        let engine = engine();
        let base = ListQuery::new().filter("status", status);
        let all = engine.filter(&rows, &base, row_accessor).unwrap();

        let first = engine
            .query(&rows, &base.clone().page_size(page_size), row_accessor)
            .unwrap();
        let mut stitched = Vec::new();
        for n in first.page_numbers() {
            let page = engine
                .query(&rows, &base.clone().page(n).page_size(page_size), row_accessor)
                .unwrap();
            stitched.extend(page.items);
        }

        prop_assert_eq!(stitched, all);
    }

    /// Every returned record satisfies the search and the filter.
    #[test]
    fn results_satisfy_predicates(
        rows in rows_strategy(60),
        term in "[a-z]{1,2}",
        status in prop_oneof![Just("active"), Just("inactive")],
    ) {
        let query = ListQuery::new()
            .search(term.clone())
            .filter("status", status)
            .page_size(usize::MAX);
        let result = engine().query(&rows, &query, row_accessor).unwrap();

        for row in result.items {
            prop_assert!(row.name.to_lowercase().contains(&term));
            prop_assert_eq!(row.status, status);
        }
    }

    /// Pages past the end are empty but keep the totals.
    #[test]
    fn page_past_end_is_empty(
        rows in rows_strategy(30),
        page_size in 1usize..10,
        extra in 1usize..5,
    ) {
        let engine = engine();
        let total_pages = engine
            .query(&rows, &ListQuery::new().page_size(page_size), row_accessor)
            .unwrap()
            .total_pages;

        let query = ListQuery::new().page(total_pages + extra).page_size(page_size);
        let result = engine.query(&rows, &query, row_accessor).unwrap();

        prop_assert!(result.items.is_empty());
        prop_assert_eq!(result.total_matched, rows.len());
        prop_assert_eq!(result.total_pages, total_pages);
    }

    /// count() agrees with total_matched.
    #[test]
    fn count_equals_total_matched(
        rows in rows_strategy(60),
        term in "[a-z]{0,2}",
        status in status_strategy(),
    ) {
        let query = ListQuery::new().search(term).filter("status", status);
        let engine = engine();
        let counted = engine.count(&rows, &query, row_accessor).unwrap();
        let page = engine.query(&rows, &query, row_accessor).unwrap();
        prop_assert_eq!(counted, page.total_matched);
    }

    /// Search ignores the case of both the term and the field.
    #[test]
    fn search_is_case_insensitive(
        rows in rows_strategy(40),
        term in "[a-z]{1,2}",
    ) {
        let engine = engine();
        let lower = engine
            .count(&rows, &ListQuery::new().search(term.clone()), row_accessor)
            .unwrap();
        let upper = engine
            .count(&rows, &ListQuery::new().search(term.to_uppercase()), row_accessor)
            .unwrap();
        prop_assert_eq!(lower, upper);
    }
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn empty_collection() {
    let rows: Vec<Row> = Vec::new();
    let page = engine()
        .query(&rows, &ListQuery::new().search("x"), row_accessor)
        .unwrap();

    assert!(page.is_empty());
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[test]
fn zero_page_size_fails() {
    let rows: Vec<Row> = Vec::new();
    let err = engine()
        .query(&rows, &ListQuery::new().page_size(0), row_accessor)
        .unwrap_err();
    assert!(err.is_invalid_query());
}

#[test]
fn unusual_search_characters_are_literal() {
    let rows = vec![
        Row {
            id: 0,
            name: "a.b".to_string(),
            status: "active",
            score: 0,
        },
        Row {
            id: 1,
            name: "axb".to_string(),
            status: "active",
            score: 0,
        },
    ];

    let page = engine()
        .query(&rows, &ListQuery::new().search(".*"), row_accessor)
        .unwrap();
    assert!(page.is_empty());

    let page = engine()
        .query(&rows, &ListQuery::new().search("."), row_accessor)
        .unwrap();
    assert_eq!(page.items, vec![&rows[0]]);
}

#[test]
fn huge_page_number_does_not_overflow() {
    let rows = vec![Row {
        id: 0,
        name: "only".to_string(),
        status: "active",
        score: 1,
    }];

    let page = engine()
        .query(
            &rows,
            &ListQuery::new().page(usize::MAX).page_size(usize::MAX),
            row_accessor,
        )
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_matched, 1);
    assert_eq!(page.total_pages, 1);
}

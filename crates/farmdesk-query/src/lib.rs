//! farmdesk-query - search, filter and paginate in-memory record collections.
//!
//! This crate backs the list screens of the farmdesk admin (users, farms,
//! notifications). Given a slice of records, a [`ListQuery`] and an accessor
//! that reads fields by name, a [`ListEngine`] returns one [`Page`] of
//! matches plus the totals needed to draw pagination controls.
//!
//! The engine is a pure function of its inputs. Callers own the search box,
//! filter selections and current page, and re-run the query whenever any of
//! them changes.
//!
//! # Quick Start
//!
//! ```rust
//! use farmdesk_query::{Comparator, ListEngine, ListQuery, Value};
//!
//! struct User {
//!     name: String,
//!     email: String,
//!     status: &'static str,
//! }
//!
//! fn accessor<'a>(user: &'a User, field: &str) -> Value<'a> {
//!     match field {
//!         "name" => Value::Text(&user.name),
//!         "email" => Value::Text(&user.email),
//!         "status" => Value::Text(user.status),
//!         _ => Value::None,
//!     }
//! }
//!
//! let users: Vec<User> = (1..=10)
//!     .map(|n| User {
//!         name: format!("User {n}"),
//!         email: format!("user{n}@email.com"),
//!         status: if n == 7 { "inactive" } else { "active" },
//!     })
//!     .collect();
//!
//! let engine = ListEngine::new()
//!     .search_fields(["name", "email"])
//!     .filter_with("status", Comparator::Exact);
//!
//! let query = ListQuery::new().filter("status", "active").page(2).page_size(8);
//! let page = engine.query(&users, &query, accessor).unwrap();
//!
//! assert_eq!(page.total_matched, 9);
//! assert_eq!(page.total_pages, 2);
//! assert_eq!(page.items.len(), 1);
//! assert_eq!(page.items[0].name, "User 10");
//! ```
//!
//! # Query Semantics
//!
//! ```text
//! match = (search term empty
//!          ∨ lowercase(term) ⊆ lowercase(any searchable field))
//!       ∧ (every filter is the wildcard or its comparator holds)
//! ```
//!
//! | Comparator | Holds when |
//! |------------|------------|
//! | `Exact` (default) | field == value |
//! | `ExactIgnoreCase` | lowercase(field) == lowercase(value) |
//! | `Contains` | value ⊆ field |
//! | `ContainsIgnoreCase` | lowercase(value) ⊆ lowercase(field) |
//! | `Pattern` | field matches the regex `value` |
//!
//! Fields are compared through their string form: numbers in decimal,
//! booleans as `true`/`false`, dates as epoch milliseconds. A field the
//! accessor reports as [`Value::None`] matches neither search nor filters.

mod comparator;
mod engine;
mod error;
mod page;
mod query;
mod traits;
mod value;

// Re-export public API
pub use comparator::{Comparator, Matcher};
pub use engine::{ListEngine, Prepared, WILDCARD};
pub use error::{QueryError, Result};
pub use page::{total_pages, Page};
pub use query::{ListQuery, DEFAULT_PAGE_SIZE};
pub use traits::Record;
pub use value::{Number, Timestamp, Value};

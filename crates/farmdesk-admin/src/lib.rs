//! farmdesk-admin - the admin list screens on top of `farmdesk-query`.
//!
//! The admin shows three lists: platform users, registered farms and
//! notifications. Each one is a search box, a few filter dropdowns and
//! pagination controls over a record collection. This crate supplies the
//! pieces around the query engine:
//!
//! - [`records`]: the record types and the fields they expose to queries
//! - [`views`]: one engine preset per list, plus the unread badge count
//! - [`source`]: where records come from (built-in fixtures or JSON files)
//! - [`state`]: the caller-owned search, filter and page state
//! - [`config`]: YAML configuration with environment overrides
//! - [`render`]: text tables with a "Showing X to Y of Z" footer, or JSON/YAML/CSV
//! - [`inbox`]: mark-read and delete actions on notifications
//! - [`app`]: one list request run end to end, as the `farmdesk` binary does
//!
//! # Example
//!
//! ```rust
//! use farmdesk_admin::{fixtures, views, ListState, UserRecord};
//! use farmdesk_query::Record;
//!
//! let users = fixtures::users();
//! let mut state = ListState::new();
//! state.set_search("kar");
//! state.set_filter("role", "worker");
//!
//! let page = views::users_engine()
//!     .query(&users, &state.to_query(8), UserRecord::accessor)
//!     .unwrap();
//! assert_eq!(page.total_matched, 1);
//! assert_eq!(page.items[0].name, "Karim Zidane");
//! ```

pub mod app;
pub mod config;
pub mod fixtures;
pub mod inbox;
pub mod records;
pub mod render;
pub mod source;
pub mod state;
pub mod views;

pub use app::{App, AppError, ListRequest};
pub use config::{Config, ConfigError, ConfigLoader, DataConfig, EnvReader, RealEnv};
pub use inbox::{Inbox, InboxAction};
pub use records::{FarmRecord, Notification, NotificationKind, Role, Status, UserRecord};
pub use render::{render_csv, render_page, render_table, OutputMode, RenderError, TableRow};
pub use source::{JsonFileSource, RecordSource, SourceError, StaticSource};
pub use state::ListState;
pub use views::{unread_count, ListKind};

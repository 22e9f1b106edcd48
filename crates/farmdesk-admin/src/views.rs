//! Engine presets for the admin list screens.
//!
//! The users and farms screens search different fields and compare their
//! filters differently: the role filter matches a case-insensitive fragment
//! of the role label (`"owner"` selects `"Farm Owner"`), while status filters
//! are exact. Those choices live here, one preset per screen.

use farmdesk_query::{Comparator, ListEngine, ListQuery, Record, Result};

use crate::records::Notification;

/// One of the admin list screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Users,
    Farms,
    Notifications,
}

impl ListKind {
    /// Engine configured for this screen.
    pub fn engine(self) -> ListEngine {
        match self {
            ListKind::Users => users_engine(),
            ListKind::Farms => farms_engine(),
            ListKind::Notifications => notifications_engine(),
        }
    }

    /// Plural noun for footers such as "Showing 1 to 8 of 10 users".
    pub fn noun(self) -> &'static str {
        match self {
            ListKind::Users => "users",
            ListKind::Farms => "farms",
            ListKind::Notifications => "notifications",
        }
    }

    /// Message shown when nothing matches.
    pub fn empty_message(self) -> &'static str {
        match self {
            ListKind::Users => "No users found matching your criteria.",
            ListKind::Farms => "No farms found matching your criteria.",
            ListKind::Notifications => "No notifications.",
        }
    }
}

/// Users: search name and email; filter by role fragment or exact status.
pub fn users_engine() -> ListEngine {
    ListEngine::new()
        .search_fields(["name", "email"])
        .filter_with("role", Comparator::ContainsIgnoreCase)
        .filter_with("status", Comparator::Exact)
}

/// Farms: search name and owner; filter by exact status.
pub fn farms_engine() -> ListEngine {
    ListEngine::new()
        .search_fields(["name", "owner"])
        .filter_with("status", Comparator::Exact)
}

/// Notifications: search title and message; filter by read flag or kind.
pub fn notifications_engine() -> ListEngine {
    ListEngine::new()
        .search_fields(["title", "message"])
        .filter_with("read", Comparator::Exact)
        .filter_with("kind", Comparator::Exact)
}

/// Query selecting unread notifications only.
pub fn unread_query() -> ListQuery {
    ListQuery::new().filter("read", "false")
}

/// Number of unread notifications, for the notification bell badge.
pub fn unread_count(notifications: &[Notification]) -> Result<usize> {
    notifications_engine().count(notifications, &unread_query(), Notification::accessor)
}

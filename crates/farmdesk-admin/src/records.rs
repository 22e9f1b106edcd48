//! Admin record types and their queryable fields.
//!
//! Each record implements [`Record`] so it can be handed to a
//! [`ListEngine`](farmdesk_query::ListEngine) with `UserRecord::accessor` and
//! friends. Closed enums are exposed to the engine through their display
//! label, which is also what the list screens show.

use std::fmt;

use farmdesk_query::{Number, Record, Timestamp, Value};
use serde::{Deserialize, Serialize};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Farm Owner")]
    FarmOwner,
    #[serde(rename = "Worker")]
    Worker,
}

impl Role {
    /// Display label, e.g. `"Farm Owner"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::FarmOwner => "Farm Owner",
            Role::Worker => "Worker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a user or farm is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Farm,
    User,
    System,
    Alert,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Farm => "farm",
            NotificationKind::User => "user",
            NotificationKind::System => "system",
            NotificationKind::Alert => "alert",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A platform user as listed on the users screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub farm: String,
    /// ISO date the user joined.
    pub joined: String,
    pub status: Status,
}

impl Record for UserRecord {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Number(Number::U64(self.id as u64)),
            "name" => Value::Text(&self.name),
            "email" => Value::Text(&self.email),
            "role" => Value::Text(self.role.as_str()),
            "farm" => Value::Text(&self.farm),
            "joined" => Value::Text(&self.joined),
            "status" => Value::Text(self.status.as_str()),
            _ => Value::None,
        }
    }
}

/// A registered farm as listed on the farms screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmRecord {
    pub id: u32,
    pub name: String,
    pub owner: String,
    pub email: String,
    pub location: String,
    pub created: String,
    pub fields: u32,
    pub tasks: u32,
    pub workers: u32,
    pub status: Status,
}

impl Record for FarmRecord {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::from(self.id),
            "name" => Value::Text(&self.name),
            "owner" => Value::Text(&self.owner),
            "email" => Value::Text(&self.email),
            "location" => Value::Text(&self.location),
            "created" => Value::Text(&self.created),
            "fields" => Value::from(self.fields),
            "tasks" => Value::from(self.tasks),
            "workers" => Value::from(self.workers),
            "status" => Value::Text(self.status.as_str()),
            _ => Value::None,
        }
    }
}

/// An entry in the admin notification center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: Timestamp,
    pub is_read: bool,
}

impl Record for Notification {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Text(&self.id),
            "kind" => Value::Text(self.kind.as_str()),
            "title" => Value::Text(&self.title),
            "message" => Value::Text(&self.message),
            "timestamp" => Value::Date(self.timestamp),
            "read" => Value::Bool(self.is_read),
            _ => Value::None,
        }
    }
}

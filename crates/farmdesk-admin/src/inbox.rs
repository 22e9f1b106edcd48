//! Notification center actions.
//!
//! The notifications screen lets an admin mark one notification as read,
//! mark everything as read, or delete a notification. [`Inbox`] applies
//! those edits to a fetched collection; saving the result is up to the
//! caller.

use std::fmt;

use farmdesk_query::Result;

use crate::records::Notification;
use crate::views;

/// One edit to the notification collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboxAction {
    /// Mark the notification with this id as read.
    MarkRead(String),
    /// Mark every notification as read.
    MarkAllRead,
    /// Remove the notification with this id.
    Delete(String),
}

impl fmt::Display for InboxAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InboxAction::MarkRead(id) => write!(f, "mark {id} read"),
            InboxAction::MarkAllRead => f.write_str("mark all read"),
            InboxAction::Delete(id) => write!(f, "delete {id}"),
        }
    }
}

/// A notification collection with read and delete actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inbox {
    notifications: Vec<Notification>,
}

impl Inbox {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn into_notifications(self) -> Vec<Notification> {
        self.notifications
    }

    /// Marks one notification as read. Returns `false` if the id is unknown.
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.is_read = true;
                true
            }
            None => false,
        }
    }

    /// Marks every notification as read, returning how many changed.
    pub fn mark_all_as_read(&mut self) -> usize {
        let mut changed = 0;
        for notification in self.notifications.iter_mut().filter(|n| !n.is_read) {
            notification.is_read = true;
            changed += 1;
        }
        changed
    }

    /// Removes a notification, returning it if it existed.
    pub fn delete(&mut self, id: &str) -> Option<Notification> {
        let index = self.notifications.iter().position(|n| n.id == id)?;
        Some(self.notifications.remove(index))
    }

    /// Applies an action. Returns `false` if it referred to an unknown id.
    pub fn apply(&mut self, action: &InboxAction) -> bool {
        let applied = match action {
            InboxAction::MarkRead(id) => self.mark_as_read(id),
            InboxAction::MarkAllRead => {
                self.mark_all_as_read();
                true
            }
            InboxAction::Delete(id) => self.delete(id).is_some(),
        };
        if applied {
            tracing::debug!(%action, "applied inbox action");
        } else {
            tracing::warn!(%action, "no such notification");
        }
        applied
    }

    /// Number of unread notifications.
    pub fn unread_count(&self) -> Result<usize> {
        views::unread_count(&self.notifications)
    }
}

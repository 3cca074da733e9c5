//! Presentation model for the dropdown
//!
//! Pure functions of `(notifications, unread_count, now)`. Nothing here
//! touches the terminal, so every visibility rule is testable on its own.

use chrono::{DateTime, Utc};

use crate::notification::{Notification, NotificationId};
use crate::time_format::format_age;

/// Shown instead of the list when the snapshot is empty
pub const EMPTY_PLACEHOLDER: &str = "No notifications";

const BADGE_CAP: usize = 99;

/// Badge text for the trigger, `None` when nothing is unread
pub fn badge_text(unread_count: usize) -> Option<String> {
    match unread_count {
        0 => None,
        n if n > BADGE_CAP => Some(format!("{}+", BADGE_CAP)),
        n => Some(n.to_string()),
    }
}

/// Summary line under the header, `None` when nothing is unread
pub fn summary_text(unread_count: usize) -> Option<String> {
    match unread_count {
        0 => None,
        1 => Some("1 unread notification".to_string()),
        n => Some(format!("{} unread notifications", n)),
    }
}

/// One rendered notification row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub age: String,
    /// Drives every emphasis cue: bold title, accent bar, unread dot
    pub unread: bool,
    /// Campaign-linked rows show a navigation affordance
    pub navigable: bool,
}

impl RowView {
    fn from_notification(notification: &Notification, now: DateTime<Utc>) -> Self {
        Self {
            id: notification.id.clone(),
            title: notification.title.clone(),
            message: notification.message.clone(),
            age: format_age(notification.created_at, now),
            unread: notification.is_unread(),
            navigable: notification.kind.is_navigable(),
        }
    }

    /// The per-row "mark as read" control exists only for unread rows
    pub fn shows_mark_read(&self) -> bool {
        self.unread
    }
}

/// Everything the dropdown shows for one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownView {
    pub badge: Option<String>,
    pub summary: Option<String>,
    pub show_mark_all: bool,
    pub rows: Vec<RowView>,
}

impl DropdownView {
    /// Build the view, keeping the store's order
    pub fn build(notifications: &[Notification], unread_count: usize, now: DateTime<Utc>) -> Self {
        Self {
            badge: badge_text(unread_count),
            summary: summary_text(unread_count),
            show_mark_all: unread_count > 0,
            rows: notifications
                .iter()
                .map(|n| RowView::from_notification(n, now))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The footer "View all" link only appears with a non-empty list
    pub fn shows_view_all(&self) -> bool {
        !self.rows.is_empty()
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod view_tests;

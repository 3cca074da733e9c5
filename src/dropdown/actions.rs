//! Store actions issued from the dropdown
//!
//! `ActionMediator` is the only path from user input to store mutations. Each
//! call issues exactly one store request, logs it, and hands any failure back
//! to the caller untouched. No retries.

use std::fmt;
use std::rc::Rc;

use crate::error::StoreError;
use crate::notification::NotificationId;
use crate::store::NotificationStore;

/// A store mutation requested by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    MarkAsRead(NotificationId),
    MarkAllAsRead,
    Delete(NotificationId),
    Refresh,
}

impl Action {
    /// Past-tense confirmation shown after success
    pub fn done_message(&self) -> &'static str {
        match self {
            Action::MarkAsRead(_) => "Marked as read",
            Action::MarkAllAsRead => "Marked all as read",
            Action::Delete(_) => "Notification deleted",
            Action::Refresh => "Notifications refreshed",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::MarkAsRead(id) => write!(f, "mark {} as read", id),
            Action::MarkAllAsRead => f.write_str("mark all as read"),
            Action::Delete(id) => write!(f, "delete {}", id),
            Action::Refresh => f.write_str("refresh notifications"),
        }
    }
}

pub struct ActionMediator<S> {
    store: Rc<S>,
}

// Manual impl: cloning shares the store handle, `S` itself need not be Clone
impl<S> Clone for ActionMediator<S> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
        }
    }
}

impl<S: NotificationStore> ActionMediator<S> {
    pub fn new(store: Rc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn mark_as_read(&self, id: &NotificationId) -> Result<(), StoreError> {
        log_request("mark_as_read", Some(id));
        self.store.mark_as_read(id).await.inspect_err(log_failure)
    }

    pub async fn mark_all_as_read(&self) -> Result<(), StoreError> {
        log_request("mark_all_as_read", None);
        self.store.mark_all_as_read().await.inspect_err(log_failure)
    }

    pub async fn delete_notification(&self, id: &NotificationId) -> Result<(), StoreError> {
        log_request("delete_notification", Some(id));
        self.store
            .delete_notification(id)
            .await
            .inspect_err(log_failure)
    }

    pub async fn refresh_notifications(&self) -> Result<(), StoreError> {
        log_request("refresh_notifications", None);
        self.store
            .refresh_notifications()
            .await
            .inspect_err(log_failure)
    }

    /// Run one user action against the store
    pub async fn perform(&self, action: &Action) -> Result<(), StoreError> {
        match action {
            Action::MarkAsRead(id) => self.mark_as_read(id).await,
            Action::MarkAllAsRead => self.mark_all_as_read().await,
            Action::Delete(id) => self.delete_notification(id).await,
            Action::Refresh => self.refresh_notifications().await,
        }
    }
}

#[cfg(debug_assertions)]
fn log_request(operation: &str, id: Option<&NotificationId>) {
    match id {
        Some(id) => log::debug!("Store request: {} {}", operation, id),
        None => log::debug!("Store request: {}", operation),
    }
}

#[cfg(not(debug_assertions))]
fn log_request(_operation: &str, _id: Option<&NotificationId>) {}

#[cfg(debug_assertions)]
fn log_failure(error: &StoreError) {
    log::error!("Store request failed: {}", error);
}

#[cfg(not(debug_assertions))]
fn log_failure(_error: &StoreError) {}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod actions_tests;

//! JSON file backed notification store
//!
//! Keeps the last loaded snapshot in memory and rewrites the whole file on
//! every mutation. `refresh_notifications` re-reads the file, so edits made by
//! other tools show up after a refresh.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use super::NotificationStore;
use crate::error::StoreError;
use crate::notification::{Notification, NotificationId};

pub struct JsonFileStore {
    path: PathBuf,
    notifications: RefCell<Vec<Notification>>,
}

impl JsonFileStore {
    /// Open the store, failing if the file is missing or malformed
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let notifications = read_file(&path)?;

        #[cfg(debug_assertions)]
        log::debug!(
            "Loaded {} notifications from {:?}",
            notifications.len(),
            path
        );

        Ok(Self {
            path,
            notifications: RefCell::new(notifications),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `updated` to disk, then make it the snapshot
    ///
    /// The in-memory snapshot only changes once the write succeeded.
    fn commit(&self, updated: Vec<Notification>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&updated)?;
        fs::write(&self.path, json)?;
        *self.notifications.borrow_mut() = updated;
        Ok(())
    }
}

fn read_file(path: &Path) -> Result<Vec<Notification>, StoreError> {
    let contents = fs::read_to_string(path)?;
    let notifications: Vec<Notification> = serde_json::from_str(&contents)?;
    Ok(notifications)
}

impl NotificationStore for JsonFileStore {
    fn notifications(&self) -> Vec<Notification> {
        self.notifications.borrow().clone()
    }

    fn unread_count(&self) -> usize {
        self.notifications
            .borrow()
            .iter()
            .filter(|n| n.is_unread())
            .count()
    }

    async fn mark_as_read(&self, id: &NotificationId) -> Result<(), StoreError> {
        let mut updated = self.notifications();
        let notification = updated
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        if notification.read {
            return Ok(());
        }
        notification.read = true;
        self.commit(updated)
    }

    async fn mark_all_as_read(&self) -> Result<(), StoreError> {
        let mut updated = self.notifications();
        for notification in updated.iter_mut() {
            notification.read = true;
        }
        self.commit(updated)
    }

    async fn delete_notification(&self, id: &NotificationId) -> Result<(), StoreError> {
        let mut updated = self.notifications();
        let before = updated.len();
        updated.retain(|n| &n.id != id);
        if updated.len() == before {
            return Err(StoreError::NotFound(id.clone()));
        }
        self.commit(updated)
    }

    async fn refresh_notifications(&self) -> Result<(), StoreError> {
        let notifications = read_file(&self.path)?;
        *self.notifications.borrow_mut() = notifications;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_file_store_tests.rs"]
mod json_file_store_tests;

//! Notification store capability
//!
//! The dropdown never owns notifications. It reads snapshots from a
//! `NotificationStore` and asks it to mutate, then re-reads.

mod json_file_store;

pub use json_file_store::JsonFileStore;

use std::future::Future;

use crate::error::StoreError;
use crate::notification::{Notification, NotificationId};

/// Store operations consumed by the dropdown
///
/// Snapshot reads are synchronous. Mutations are async and report their own
/// failures; callers do not retry.
pub trait NotificationStore {
    /// Current notifications, in the store's display order
    fn notifications(&self) -> Vec<Notification>;

    /// Store-owned unread counter
    fn unread_count(&self) -> usize;

    /// Mark one notification read. Marking an already-read one is a no-op.
    fn mark_as_read(&self, id: &NotificationId) -> impl Future<Output = Result<(), StoreError>>;

    fn mark_all_as_read(&self) -> impl Future<Output = Result<(), StoreError>>;

    /// Remove a notification; it must be absent from later snapshots
    fn delete_notification(
        &self,
        id: &NotificationId,
    ) -> impl Future<Output = Result<(), StoreError>>;

    /// Re-sync the snapshot from the source of truth
    fn refresh_notifications(&self) -> impl Future<Output = Result<(), StoreError>>;
}

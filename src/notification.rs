//! Notification records
//!
//! Read-only snapshot types handed out by a `NotificationStore`. The store owns
//! every record; the dropdown only reads them and asks the store to mutate.

mod notification_model;

pub use notification_model::{CampaignId, Notification, NotificationId, NotificationKind};

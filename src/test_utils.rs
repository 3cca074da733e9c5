//! Shared test utilities for belltray
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use chrono::{DateTime, Duration, TimeZone, Utc};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::Notify;

    use crate::error::StoreError;
    use crate::navigator::Navigator;
    use crate::notification::{CampaignId, Notification, NotificationId, NotificationKind};
    use crate::store::NotificationStore;

    /// Fixed clock for render and age tests
    pub fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    /// Plain notification created ten minutes before `fixed_now`
    pub fn plain(id: &str, title: &str, read: bool) -> Notification {
        Notification {
            id: NotificationId::new(id),
            title: title.to_string(),
            message: format!("{} details", title),
            read,
            created_at: fixed_now() - Duration::minutes(10),
            kind: NotificationKind::Plain,
        }
    }

    /// Campaign-linked notification created ten minutes before `fixed_now`
    pub fn linked(id: &str, title: &str, read: bool, campaign_id: &str) -> Notification {
        Notification {
            kind: NotificationKind::CampaignLinked {
                campaign_id: CampaignId::new(campaign_id),
            },
            ..plain(id, title, read)
        }
    }

    /// Ordered log shared between the recording store and navigator
    pub type EventLog = Rc<RefCell<Vec<String>>>;

    /// In-memory store that records every request it receives
    ///
    /// `mark_as_read` can be held pending with `hold_mark_as_read` and
    /// released through the returned `Notify`.
    pub struct RecordingStore {
        notifications: RefCell<Vec<Notification>>,
        log: EventLog,
        failing: Cell<bool>,
        gate: RefCell<Option<Rc<Notify>>>,
    }

    impl RecordingStore {
        pub fn new(notifications: Vec<Notification>) -> Self {
            Self::with_log(notifications, EventLog::default())
        }

        pub fn with_log(notifications: Vec<Notification>, log: EventLog) -> Self {
            Self {
                notifications: RefCell::new(notifications),
                log,
                failing: Cell::new(false),
                gate: RefCell::new(None),
            }
        }

        pub fn log(&self) -> EventLog {
            Rc::clone(&self.log)
        }

        pub fn events(&self) -> Vec<String> {
            self.log.borrow().clone()
        }

        /// Make every following mutation fail with `Unavailable`
        pub fn fail_requests(&self) {
            self.failing.set(true);
        }

        pub fn recover(&self) {
            self.failing.set(false);
        }

        pub fn hold_mark_as_read(&self) -> Rc<Notify> {
            let gate = Rc::new(Notify::new());
            *self.gate.borrow_mut() = Some(Rc::clone(&gate));
            gate
        }

        fn record(&self, event: String) -> Result<(), StoreError> {
            self.log.borrow_mut().push(event);
            if self.failing.get() {
                return Err(StoreError::Unavailable("offline".to_string()));
            }
            Ok(())
        }
    }

    impl NotificationStore for RecordingStore {
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
            self.record(format!("mark_as_read:{}", id))?;
            let gate = self.gate.borrow().clone();
            if let Some(gate) = gate {
                gate.notified().await;
            }
            if let Some(n) = self
                .notifications
                .borrow_mut()
                .iter_mut()
                .find(|n| &n.id == id)
            {
                n.read = true;
            }
            self.log
                .borrow_mut()
                .push(format!("mark_as_read_resolved:{}", id));
            Ok(())
        }

        async fn mark_all_as_read(&self) -> Result<(), StoreError> {
            self.record("mark_all_as_read".to_string())?;
            for n in self.notifications.borrow_mut().iter_mut() {
                n.read = true;
            }
            Ok(())
        }

        async fn delete_notification(&self, id: &NotificationId) -> Result<(), StoreError> {
            self.record(format!("delete:{}", id))?;
            self.notifications.borrow_mut().retain(|n| &n.id != id);
            Ok(())
        }

        async fn refresh_notifications(&self) -> Result<(), StoreError> {
            self.record("refresh".to_string())
        }
    }

    /// Navigator that appends `navigate:<path>` to an event log
    pub struct RecordingNavigator {
        log: EventLog,
    }

    impl RecordingNavigator {
        pub fn new(log: EventLog) -> Self {
            Self { log }
        }

        pub fn paths(&self) -> Vec<String> {
            self.log
                .borrow()
                .iter()
                .filter_map(|e| e.strip_prefix("navigate:").map(str::to_string))
                .collect()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.log.borrow_mut().push(format!("navigate:{}", path));
        }
    }

    /// Sample inbox: unread plain, unread campaign, read plain
    pub fn sample_notifications() -> Vec<Notification> {
        vec![
            plain("n1", "Build failed", false),
            linked("n2", "Spring sale live", false, "c1"),
            plain("n3", "Weekly digest", true),
        ]
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}

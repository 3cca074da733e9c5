use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque notification identifier, unique within a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(String);

impl NotificationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to an external campaign, the navigation target of linked notifications
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(String);

impl CampaignId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether activating a notification navigates anywhere
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Plain,
    CampaignLinked { campaign_id: CampaignId },
}

impl NotificationKind {
    pub fn campaign_id(&self) -> Option<&CampaignId> {
        match self {
            NotificationKind::Plain => None,
            NotificationKind::CampaignLinked { campaign_id } => Some(campaign_id),
        }
    }

    pub fn is_navigable(&self) -> bool {
        matches!(self, NotificationKind::CampaignLinked { .. })
    }
}

/// A single notification as seen in a store snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NotificationRecord", into = "NotificationRecord")]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn is_unread(&self) -> bool {
        !self.read
    }
}

/// On-disk shape: the campaign link is an optional field
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NotificationRecord {
    id: NotificationId,
    title: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    read: bool,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    campaign_id: Option<CampaignId>,
}

impl From<NotificationRecord> for Notification {
    fn from(record: NotificationRecord) -> Self {
        let kind = match record.campaign_id {
            Some(campaign_id) => NotificationKind::CampaignLinked { campaign_id },
            None => NotificationKind::Plain,
        };
        Self {
            id: record.id,
            title: record.title,
            message: record.message,
            read: record.read,
            created_at: record.created_at,
            kind,
        }
    }
}

impl From<Notification> for NotificationRecord {
    fn from(notification: Notification) -> Self {
        let campaign_id = match notification.kind {
            NotificationKind::Plain => None,
            NotificationKind::CampaignLinked { campaign_id } => Some(campaign_id),
        };
        Self {
            id: notification.id,
            title: notification.title,
            message: notification.message,
            read: notification.read,
            created_at: notification.created_at,
            campaign_id,
        }
    }
}

#[cfg(test)]
#[path = "notification_model_tests.rs"]
mod notification_model_tests;

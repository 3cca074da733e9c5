use thiserror::Error;

use crate::notification::NotificationId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Notification not found: {0}")]
    NotFound(NotificationId),

    #[error("Notification store unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid notification data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

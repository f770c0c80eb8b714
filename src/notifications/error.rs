//! Notification Error Types

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Failed to deliver {event_type} event to subscribers: {failed_subscribers:?}")]
    PublishFailed {
        event_type: String,
        failed_subscribers: Vec<String>,
    },
}

/// Result type for notification operations
pub type NotificationResult<T> = Result<T, NotificationError>;

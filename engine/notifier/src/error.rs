//! Error types for notification dispatch

use thiserror::Error;

/// Result type alias for notifier operations
pub type Result<T> = std::result::Result<T, NotifyError>;

/// Errors that can occur while handing off a notification
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The downstream dispatcher hung up
    #[error("Notification channel closed")]
    ChannelClosed,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

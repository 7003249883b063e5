//! Error types for the storage layer

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in the storage layer
#[derive(Error, Debug)]
pub enum StoreError {
    /// Record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bid rejected because the announcement no longer accepts bids
    #[error("Bidding window closed: {0}")]
    WindowClosed(String),

    /// Record with the same identity already exists
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend unavailable or misbehaving
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create a new not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new window closed error
    pub fn window_closed(msg: impl Into<String>) -> Self {
        Self::WindowClosed(msg.into())
    }

    /// Create a new already exists error
    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::AlreadyExists(msg.into())
    }

    /// Create a new backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

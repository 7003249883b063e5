//! Error taxonomy for auction operations

use thiserror::Error;

/// Errors surfaced by auction operations.
///
/// `Validation`, `Conflict`, and `InvalidReference` are terminal for the
/// triggering request; retrying them is pointless. `Dependency` indicates a
/// collaborator outage and is the only variant worth retrying.
#[derive(Error, Debug)]
pub enum AuctionError {
    /// Malformed or missing input, rejected before any state change
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Operation not valid for the current lifecycle state
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Id does not resolve or does not belong to the claimed parent
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// External store or notification collaborator unavailable
    #[error("Dependency failure: {0}")]
    Dependency(String),
}

impl AuctionError {
    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create a new invalid reference error
    pub fn invalid_reference(msg: impl Into<String>) -> Self {
        Self::InvalidReference(msg.into())
    }

    /// Create a new dependency failure error
    pub fn dependency(msg: impl Into<String>) -> Self {
        Self::Dependency(msg.into())
    }

    /// Whether a retry of the failed operation can possibly succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Dependency(_))
    }
}

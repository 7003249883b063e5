//! # Notifier
//!
//! Notification boundary of the MoveBid platform. Lifecycle transitions
//! hand [`auction_core::NotificationEvent`]s to a [`NotificationSink`];
//! delivery is fire-and-forget with at-least-once semantics, and consumer
//! idempotency is keyed on announcement id plus event kind.
//!
//! A dispatch failure is never allowed to roll back the state change that
//! produced the event; callers log and move on.

pub mod error;
pub mod sink;
pub mod template;

pub use error::{NotifyError, Result};
pub use sink::{ChannelSink, LogSink, NotificationSink};

//! MoveBid Service Library
//!
//! This library wires the auction engine to its storage and notification
//! boundaries: configuration management, logging setup, the public auction
//! operations, and the periodic expiry/reminder/review sweep.

use anyhow::{Context, Result};

pub mod config;
pub mod logging;
pub mod service;
pub mod sweep;

pub use config::{ServiceConfig, SweepSettings};
pub use logging::{initialize_logging, initialize_logging_with_config};
pub use service::AuctionService;
pub use sweep::{ExpirySweep, SweepStats};

/// Load configuration from defaults and environment variables
pub fn load_configuration() -> Result<ServiceConfig> {
    config::load_config().context("Failed to load service configuration")
}

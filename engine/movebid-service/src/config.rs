//! Service configuration management

use anyhow::Result;
use auction_core::Locale;
use serde::{Deserialize, Serialize};

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Sweep configuration
    pub sweep: SweepSettings,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Locale used when rendering outbound notifications
    pub locale: Locale,
}

/// Settings for the periodic expiry/reminder/review sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSettings {
    /// Poll interval in seconds
    pub interval_secs: u64,

    /// Send the closing reminder once less than this many hours remain
    pub reminder_lead_hours: i64,

    /// Ask for a review this many days after completion
    pub review_delay_days: i64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty)
    pub format: String,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self { interval_secs: 30, reminder_lead_hours: 24, review_delay_days: 3 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

impl SweepSettings {
    /// Poll interval as a std duration
    pub fn interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.interval_secs)
    }

    /// Reminder lead as a chrono duration
    pub fn reminder_lead(&self) -> chrono::Duration {
        chrono::Duration::hours(self.reminder_lead_hours)
    }

    /// Review delay as a chrono duration
    pub fn review_delay(&self) -> chrono::Duration {
        chrono::Duration::days(self.review_delay_days)
    }
}

/// Load configuration from defaults and environment variables
pub fn load_config() -> Result<ServiceConfig> {
    let mut config = ServiceConfig::default();

    load_from_env(&mut config)?;
    validate_config(&config)?;

    Ok(config)
}

/// Override configuration from environment variables
fn load_from_env(config: &mut ServiceConfig) -> Result<()> {
    if let Ok(level) = std::env::var("MOVEBID_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Ok(format) = std::env::var("MOVEBID_LOG_FORMAT") {
        config.logging.format = format;
    }

    if let Ok(interval) = std::env::var("MOVEBID_SWEEP_INTERVAL_SECS") {
        config.sweep.interval_secs = interval.parse().unwrap_or(30);
    }

    if let Ok(lead) = std::env::var("MOVEBID_REMINDER_LEAD_HOURS") {
        config.sweep.reminder_lead_hours = lead.parse().unwrap_or(24);
    }

    if let Ok(delay) = std::env::var("MOVEBID_REVIEW_DELAY_DAYS") {
        config.sweep.review_delay_days = delay.parse().unwrap_or(3);
    }

    if let Ok(locale) = std::env::var("MOVEBID_LOCALE") {
        config.locale = locale
            .parse()
            .map_err(|e: String| anyhow::anyhow!("Invalid MOVEBID_LOCALE: {e}"))?;
    }

    Ok(())
}

/// Validate configuration
fn validate_config(config: &ServiceConfig) -> Result<()> {
    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow::anyhow!("Invalid log level: {}", config.logging.level)),
    }

    match config.logging.format.as_str() {
        "json" | "pretty" => {}
        _ => return Err(anyhow::anyhow!("Invalid log format: {}", config.logging.format)),
    }

    if config.sweep.interval_secs == 0 {
        return Err(anyhow::anyhow!("Sweep interval must be positive"));
    }

    if config.sweep.reminder_lead_hours < 0 {
        return Err(anyhow::anyhow!(
            "Reminder lead must not be negative: {}",
            config.sweep.reminder_lead_hours
        ));
    }

    if config.sweep.review_delay_days < 0 {
        return Err(anyhow::anyhow!(
            "Review delay must not be negative: {}",
            config.sweep.review_delay_days
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ServiceConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.sweep.interval_secs, 30);
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ServiceConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = ServiceConfig::default();
        config.sweep.interval_secs = 0;
        assert!(validate_config(&config).is_err());

        let mut config = ServiceConfig::default();
        config.sweep.reminder_lead_hours = -1;
        assert!(validate_config(&config).is_err());
    }
}

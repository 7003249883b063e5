//! MoveBid Service
//!
//! Entry point for the MoveBid reverse-auction platform. It wires the
//! in-memory store and the notification channel to the auction engine and
//! runs the periodic sweep until shutdown.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use announcement_store::{AnnouncementStore, InMemoryStore};
use movebid_service::{initialize_logging_with_config, load_configuration, ExpirySweep};
use notifier::{ChannelSink, NotificationSink};

#[derive(Parser, Debug)]
#[command(name = "movebid", about = "Reverse-auction service for moving requests", version)]
struct Cli {
    /// Run a single sweep pass and exit
    #[arg(long)]
    sweep_once: bool,

    /// Override the configured log level
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_configuration()?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    initialize_logging_with_config(&config.logging.level, &config.logging.format)?;

    info!("Starting MoveBid service v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn AnnouncementStore> = Arc::new(InMemoryStore::new());
    let (sink, mut events) = ChannelSink::new();
    let sink: Arc<dyn NotificationSink> = Arc::new(sink);

    // Render and log outbound notifications; a mail dispatcher would
    // consume this channel in production.
    let locale = config.locale;
    let dispatcher = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            info!(
                kind = ?event.kind(),
                announcement = %event.announcement_id(),
                "{}",
                notifier::template::render(&event, locale)
            );
        }
    });

    let sweep = ExpirySweep::new(store.clone(), sink.clone(), config.sweep.clone());

    if cli.sweep_once {
        let stats = sweep.run_once(chrono::Utc::now()).await?;
        info!(
            expired = stats.expired,
            reminders = stats.reminders,
            review_requests = stats.review_requests,
            "sweep complete"
        );
        return Ok(());
    }

    let sweep_handle = tokio::spawn(async move { sweep.run().await });

    info!("MoveBid service is running. Press Ctrl+C to shut down.");
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received");
    sweep_handle.abort();
    dispatcher.abort();

    info!("MoveBid service shutdown complete");
    Ok(())
}

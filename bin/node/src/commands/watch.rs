//! Watch Subcommand

use crate::flags::GlobalArgs;
use clap::Parser;
use rollnode_pending::{Metrics, PendingHeaders, PendingRange};
use rollnode_storage::ChainDb;
use std::{sync::Arc, time::Duration};
use tracing::{info, warn};

/// The `watch` Subcommand
///
/// Re-reads the store at a fixed interval, logs the pending range and exports it through the
/// tracker gauges. Combine with `--metrics.port` to scrape it.
///
/// # Usage
///
/// ```sh
/// rollnode --metrics.port 9090 watch [--interval <SECS>]
/// ```
#[derive(Parser, PartialEq, Eq, Debug, Clone)]
#[command(about = "Periodically reports the pending header range")]
pub struct WatchCommand {
    /// Seconds between two reports.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,
}

impl WatchCommand {
    /// Runs the subcommand until cancelled.
    pub async fn run(self, args: &GlobalArgs) -> anyhow::Result<()> {
        if let Some(addr) = args.metrics.init_metrics()? {
            info!(target: "rollnode", %addr, "Metrics enabled");
        }
        Metrics::init();

        let db = args.open_store_read_only()?;
        let mut ticker = tokio::time::interval(Duration::from_secs(self.interval));
        loop {
            ticker.tick().await;
            match observe(&db) {
                Ok(range) => info!(
                    target: "rollnode",
                    pending = range.len(),
                    range = %range,
                    "Pending headers"
                ),
                Err(err) => warn!(target: "rollnode", %err, "Failed to read pending headers"),
            }
        }
    }
}

/// Refreshes the store height and derives the current pending range.
fn observe(db: &Arc<ChainDb>) -> anyhow::Result<PendingRange> {
    db.refresh_height()?;
    let tracker = PendingHeaders::new(Arc::clone(db))?;
    Ok(tracker.pending_range())
}

//! Status Subcommand

use crate::flags::GlobalArgs;
use clap::Parser;
use rollnode_pending::{PendingHeaders, PendingRange};
use rollnode_storage::{BlockStorageReader, SubmissionProgressStorage};
use serde::Serialize;
use std::sync::Arc;

/// The `status` Subcommand
///
/// # Usage
///
/// ```sh
/// rollnode status [--json]
/// ```
#[derive(Parser, Default, PartialEq, Eq, Debug, Clone)]
#[command(about = "Shows the store height and the pending header range")]
pub struct StatusCommand {
    /// Print the status as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Snapshot of the pending header state of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Status {
    /// Height of the store.
    pub height: u64,
    /// Height of the last header confirmed as submitted.
    pub last_submitted_height: u64,
    /// Range of pending heights.
    pub pending: PendingRange,
    /// Number of pending headers.
    pub num_pending: u64,
}

impl Status {
    /// Reads the status of `store`.
    pub fn load<S>(store: Arc<S>) -> anyhow::Result<Self>
    where
        S: BlockStorageReader + SubmissionProgressStorage,
    {
        let tracker = PendingHeaders::new(store)?;
        let pending = tracker.pending_range();
        Ok(Self {
            height: pending.to,
            last_submitted_height: tracker.last_submitted_height(),
            pending,
            num_pending: pending.len(),
        })
    }
}

impl StatusCommand {
    /// Runs the subcommand.
    pub fn run(self, args: &GlobalArgs) -> anyhow::Result<()> {
        let status = Status::load(args.open_store_read_only()?)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&status)?);
            return Ok(());
        }
        println!("Store:          {}", args.datadir.display());
        println!("Height:         {}", status.height);
        println!("Last submitted: {}", status.last_submitted_height);
        println!("Pending:        {} ({} headers)", status.pending, status.num_pending);
        Ok(())
    }
}

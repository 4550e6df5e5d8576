//! Mark Submitted Subcommand

use crate::flags::GlobalArgs;
use clap::Parser;
use rollnode_pending::PendingHeaders;
use tracing::info;

/// The `mark-submitted` Subcommand
///
/// Records that every header up to `HEIGHT` was submitted, for example after submitting
/// headers out of band. The node must be stopped.
///
/// # Usage
///
/// ```sh
/// rollnode mark-submitted <HEIGHT>
/// ```
#[derive(Parser, PartialEq, Eq, Debug, Clone)]
#[command(about = "Marks headers up to the given height as submitted")]
pub struct MarkSubmittedCommand {
    /// Height of the last submitted header.
    pub height: u64,
}

impl MarkSubmittedCommand {
    /// Runs the subcommand.
    pub fn run(self, args: &GlobalArgs) -> anyhow::Result<()> {
        let tracker = PendingHeaders::new(args.open_store()?)?;
        let before = tracker.pending_range();
        tracker.mark_submitted(self.height)?;
        let after = tracker.pending_range();

        info!(target: "rollnode", %before, %after, "Updated last submitted height");
        println!("Last submitted: {}", tracker.last_submitted_height());
        println!("Pending:        {after} ({} headers)", after.len());
        Ok(())
    }
}

//! Headers Subcommand

use crate::flags::GlobalArgs;
use alloy_primitives::{B256, Bytes};
use clap::Parser;
use rollnode_pending::PendingHeaders;
use rollnode_primitives::SignedHeader;
use rollnode_storage::{BlockStorageReader, SubmissionProgressStorage};
use tabled::Tabled;

/// The `headers` Subcommand
///
/// Lists the pending headers in height order.
///
/// # Usage
///
/// ```sh
/// rollnode headers [--limit <N>]
/// ```
#[derive(Parser, Default, PartialEq, Eq, Debug, Clone)]
#[command(about = "Lists headers that have not been submitted yet")]
pub struct HeadersCommand {
    /// Maximum number of headers to list.
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// A pending header as displayed in the table.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct HeaderRow {
    /// Block height.
    #[tabled(rename = "Height")]
    pub height: u64,
    /// Block time.
    #[tabled(rename = "Time")]
    pub time: u64,
    /// Header hash.
    #[tabled(rename = "Hash")]
    pub hash: B256,
    /// Header identifier.
    #[tabled(rename = "Id")]
    pub id: B256,
    /// Proposer address.
    #[tabled(rename = "Proposer")]
    pub proposer: Bytes,
}

impl From<&SignedHeader> for HeaderRow {
    fn from(signed: &SignedHeader) -> Self {
        let header = &signed.header;
        Self {
            height: header.height,
            time: header.time,
            hash: header.hash(),
            id: header.id(),
            proposer: header.proposer_address.clone(),
        }
    }
}

impl HeadersCommand {
    /// Runs the subcommand.
    pub fn run(self, args: &GlobalArgs) -> anyhow::Result<()> {
        let tracker = PendingHeaders::new(args.open_store_read_only()?)?;
        let rows = self.rows(&tracker)?;
        if rows.is_empty() {
            println!("No pending headers");
            return Ok(());
        }

        let mut table = tabled::Table::new(rows);
        table.with(tabled::settings::Style::modern());
        println!("{table}");
        Ok(())
    }

    /// Loads the table rows, stopping at the first header that cannot be read.
    pub fn rows<S>(&self, tracker: &PendingHeaders<S>) -> anyhow::Result<Vec<HeaderRow>>
    where
        S: BlockStorageReader + SubmissionProgressStorage,
    {
        let rows = tracker
            .pending_headers()
            .take(self.limit.unwrap_or(usize::MAX))
            .map(|header| header.map(|header| HeaderRow::from(&header)))
            .collect::<Result<_, _>>()?;
        Ok(rows)
    }
}

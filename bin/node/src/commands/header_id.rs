//! Header Id Subcommand

use crate::flags::GlobalArgs;
use alloy_primitives::Bytes;
use clap::Parser;
use rollnode_primitives::header_id;

/// The `header-id` Subcommand
///
/// Prints the identifier derived from a header's height and proposer.
///
/// # Usage
///
/// ```sh
/// rollnode header-id --height <HEIGHT> --proposer <HEX>
/// ```
#[derive(Parser, PartialEq, Eq, Debug, Clone)]
#[command(about = "Computes the identifier of a header from its height and proposer")]
pub struct HeaderIdCommand {
    /// Height of the header.
    #[arg(long)]
    pub height: u64,
    /// Hex-encoded proposer address.
    #[arg(long, default_value = "0x")]
    pub proposer: Bytes,
}

impl HeaderIdCommand {
    /// Runs the subcommand.
    pub fn run(self, _args: &GlobalArgs) -> anyhow::Result<()> {
        println!("{}", header_id(self.height, &self.proposer));
        Ok(())
    }
}

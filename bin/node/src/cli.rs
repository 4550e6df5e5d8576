//! Contains the rollnode CLI.

use crate::{
    commands::{
        HeaderIdCommand, HeadersCommand, MarkSubmittedCommand, StatusCommand, WatchCommand,
    },
    flags::GlobalArgs,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::future::Future;
use tracing::info;

/// Subcommands for the CLI.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Shows the store height and the pending header range.
    Status(StatusCommand),
    /// Lists pending headers.
    Headers(HeadersCommand),
    /// Marks headers as submitted.
    MarkSubmitted(MarkSubmittedCommand),
    /// Computes a header identifier.
    HeaderId(HeaderIdCommand),
    /// Periodically reports the pending range and exports it as metrics.
    Watch(WatchCommand),
}

/// The rollnode CLI.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub subcommand: Commands,
    /// Global arguments for the CLI.
    #[command(flatten)]
    pub global: GlobalArgs,
}

impl Cli {
    /// Runs the CLI.
    pub fn run(self) -> Result<()> {
        self.global.log_args.init_tracing_subscriber()?;

        match self.subcommand {
            Commands::Status(status) => status.run(&self.global),
            Commands::Headers(headers) => headers.run(&self.global),
            Commands::MarkSubmitted(mark) => mark.run(&self.global),
            Commands::HeaderId(id) => id.run(&self.global),
            Commands::Watch(watch) => Self::run_until_ctrl_c(watch.run(&self.global)),
        }
    }

    /// Runs the given future on a multi-threaded tokio runtime until it completes or Ctrl-C
    /// is received.
    pub fn run_until_ctrl_c<F>(fut: F) -> Result<()>
    where
        F: Future<Output = Result<()>>,
    {
        let rt = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
        rt.block_on(async move {
            tokio::select! {
                res = fut => res,
                _ = tokio::signal::ctrl_c() => {
                    info!(target: "rollnode", "Received Ctrl-C, shutting down");
                    Ok(())
                }
            }
        })
    }
}

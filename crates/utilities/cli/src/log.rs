//! Logging arguments and subscriber setup.

use crate::{CliError, CliResult};
use clap::{ArgAction, Parser};
use tracing::Level;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Logging arguments.
#[derive(Parser, Default, Clone, Debug, PartialEq, Eq)]
pub struct LogArgs {
    /// Verbosity level (0-4). Repeat the flag for more output: `-vvv` logs at debug level.
    #[arg(long = "verbosity", short = 'v', global = true, action = ArgAction::Count)]
    pub verbosity: u8,
}

impl LogArgs {
    /// Installs the global tracing subscriber for these arguments.
    pub fn init_tracing_subscriber(&self) -> CliResult<()> {
        init_tracing_subscriber(self.verbosity, None::<EnvFilter>)
    }
}

/// Maps a `-v` count to the most verbose level that gets logged.
pub const fn verbosity_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initializes the tracing subscriber.
///
/// Events are written to stderr. Without an explicit `filter` the `RUST_LOG` environment
/// variable is honoured, and the verbosity level is added on top as the default directive.
pub fn init_tracing_subscriber(
    verbosity: u8,
    filter: Option<impl Into<EnvFilter>>,
) -> CliResult<()> {
    let filter = filter.map_or_else(EnvFilter::from_default_env, Into::into);
    let filter = filter.add_directive(LevelFilter::from_level(verbosity_level(verbosity)).into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(CliError::Tracing)
}

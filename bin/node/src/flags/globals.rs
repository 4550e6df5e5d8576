//! Global arguments for the CLI.

use anyhow::ensure;
use clap::Parser;
use rollnode_cli::{LogArgs, MetricsArgs};
use rollnode_storage::ChainDb;
use std::{path::PathBuf, sync::Arc};

/// Global arguments for the CLI.
#[derive(Parser, Clone, Debug)]
pub struct GlobalArgs {
    /// Logging arguments.
    #[command(flatten)]
    pub log_args: LogArgs,
    /// Directory of the block store.
    #[arg(long, global = true, env = "ROLLNODE_DATADIR", default_value = "rollnode-data")]
    pub datadir: PathBuf,
    /// Prometheus CLI arguments.
    #[command(flatten)]
    pub metrics: MetricsArgs,
}

impl GlobalArgs {
    /// Opens the block store for writing. Fails while a node holds the store.
    pub fn open_store(&self) -> anyhow::Result<Arc<ChainDb>> {
        ensure!(self.datadir.exists(), "No block store at {}", self.datadir.display());
        Ok(Arc::new(ChainDb::new(&self.datadir)?))
    }

    /// Opens the block store read-only.
    pub fn open_store_read_only(&self) -> anyhow::Result<Arc<ChainDb>> {
        ensure!(self.datadir.exists(), "No block store at {}", self.datadir.display());
        Ok(Arc::new(ChainDb::open_read_only(&self.datadir)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_datadir_flag() {
        let args = GlobalArgs::try_parse_from(["test", "--datadir", "/tmp/store"]).unwrap();
        assert_eq!(args.datadir, PathBuf::from("/tmp/store"));
        assert_eq!(args.log_args.verbosity, 0);
        assert_eq!(args.metrics.port, None);
    }

    #[test]
    fn test_missing_store_is_not_created() {
        let dir = TempDir::new().unwrap();
        let datadir = dir.path().join("missing");
        let args =
            GlobalArgs::try_parse_from(["test", "--datadir", datadir.to_str().unwrap()]).unwrap();

        assert!(args.open_store().is_err());
        assert!(args.open_store_read_only().is_err());
        assert!(!datadir.exists());
    }
}

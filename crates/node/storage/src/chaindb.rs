//! Main database access structure and transaction contexts.

use crate::{
    error::StorageError,
    models::{CursorKey, StoredBlock, Tables},
    providers::{BlockProvider, CursorProvider},
    traits::{BlockStorageReader, BlockStorageWriter, SubmissionProgressStorage},
};
use alloy_primitives::B256;
use reth_db::{
    DatabaseEnv,
    mdbx::{DatabaseArguments, init_db_for, open_db_read_only},
};
use reth_db_api::{Database, transaction::DbTx};
use rollnode_primitives::{BlockData, Header, Signature};
use std::{
    path::Path,
    sync::atomic::{AtomicU64, Ordering},
};
use tracing::{debug, error, info};

/// Manages the database environment for a single chain.
/// Provides transactional access to data via providers.
///
/// The height cursor is mirrored in memory so that [`BlockStorageReader::height`] never
/// touches the database. The mirror is loaded on open and refreshed after every committed
/// [`BlockStorageWriter::set_height`] and on every
/// [`SubmissionProgressStorage::last_submitted_height`] read.
#[derive(Debug)]
pub struct ChainDb {
    env: DatabaseEnv,
    height: AtomicU64,
}

impl ChainDb {
    /// Creates or opens a database environment at the given path.
    pub fn new(path: &Path) -> Result<Self, StorageError> {
        let env = init_db_for::<_, Tables>(path, DatabaseArguments::default())
            .map_err(|err: eyre::Report| StorageError::DatabaseInit(err.into()))
            .inspect_err(|err| {
                error!(target: "block_store", path = %path.display(), %err, "Failed to open database");
            })?;
        let height = env.view(|tx| CursorProvider::new(tx).get_cursor(CursorKey::Height))??;
        info!(target: "block_store", path = %path.display(), height, "Opened block store");
        Ok(Self { env, height: AtomicU64::new(height) })
    }

    /// Opens an existing database environment without write access.
    ///
    /// A read-only handle can be opened next to a running node. Its height mirror only moves
    /// on [`Self::refresh_height`], and every write fails.
    pub fn open_read_only(path: &Path) -> Result<Self, StorageError> {
        let env = open_db_read_only(path, DatabaseArguments::default())
            .map_err(|err: eyre::Report| StorageError::DatabaseInit(err.into()))
            .inspect_err(|err| {
                error!(target: "block_store", path = %path.display(), %err, "Failed to open database read-only");
            })?;
        let height = env.view(|tx| CursorProvider::new(tx).get_cursor(CursorKey::Height))??;
        debug!(target: "block_store", path = %path.display(), height, "Opened block store read-only");
        Ok(Self { env, height: AtomicU64::new(height) })
    }

    /// Reloads the height mirror from the database and returns the current height.
    ///
    /// Only needed when another process writes to the same database.
    pub fn refresh_height(&self) -> Result<u64, StorageError> {
        let height = self.env.view(|tx| CursorProvider::new(tx).get_cursor(CursorKey::Height))??;
        self.height.fetch_max(height, Ordering::AcqRel);
        Ok(self.height())
    }

    /// Runs `f` inside a write transaction, committing on success and aborting on error.
    fn update<T>(
        &self,
        f: impl FnOnce(&<DatabaseEnv as Database>::TXMut) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let tx = self.env.tx_mut()?;
        match f(&tx) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(err) => {
                tx.abort();
                Err(err)
            }
        }
    }
}

impl BlockStorageReader for ChainDb {
    fn get_block_data(&self, height: u64) -> Result<(Header, BlockData, Signature), StorageError> {
        let block = self.env.view(|tx| BlockProvider::new(tx).get_block(height))??;
        Ok(block.into_parts())
    }

    fn get_block_by_hash(
        &self,
        hash: B256,
    ) -> Result<(Header, BlockData, Signature), StorageError> {
        let block = self.env.view(|tx| {
            let provider = BlockProvider::new(tx);
            let height = provider.get_height_by_hash(hash)?;
            provider.get_block(height)
        })??;
        Ok(block.into_parts())
    }

    fn height(&self) -> u64 {
        self.height.load(Ordering::Acquire)
    }
}

impl BlockStorageWriter for ChainDb {
    fn save_block_data(
        &self,
        header: &Header,
        data: &BlockData,
        signature: &Signature,
    ) -> Result<(), StorageError> {
        let block = StoredBlock {
            header: header.clone(),
            data: data.clone(),
            signature: signature.clone(),
        };
        let written = self.update(|tx| BlockProvider::new(tx).save_block(&block))?;
        if written {
            debug!(target: "block_store", height = header.height, hash = %header.hash(), "Saved block");
        }
        Ok(())
    }

    fn set_height(&self, height: u64) -> Result<(), StorageError> {
        self.update(|tx| CursorProvider::new(tx).advance_height(height))?;
        self.height.fetch_max(height, Ordering::AcqRel);
        debug!(target: "block_store", height, "Advanced height");
        Ok(())
    }
}

impl SubmissionProgressStorage for ChainDb {
    fn last_submitted_height(&self) -> Result<u64, StorageError> {
        // Both cursors come from one snapshot, so the mirror never trails the returned height
        // when another process advances them.
        let (confirmed, height) = self.env.view(|tx| {
            let cursors = CursorProvider::new(tx);
            Ok::<_, StorageError>((
                cursors.get_cursor(CursorKey::LastSubmittedHeader)?,
                cursors.get_cursor(CursorKey::Height)?,
            ))
        })??;
        self.height.fetch_max(height, Ordering::AcqRel);
        Ok(confirmed)
    }

    fn set_last_submitted_height(&self, height: u64) -> Result<(), StorageError> {
        self.update(|tx| {
            CursorProvider::new(tx).set_cursor(CursorKey::LastSubmittedHeader, height)
        })
    }
}

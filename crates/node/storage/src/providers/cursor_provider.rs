//! Provider for the durable progress cursors.

use crate::{
    StorageError,
    models::{CursorKey, Cursors, StoredHeight},
};
use reth_db_api::transaction::{DbTx, DbTxMut};
use tracing::{error, warn};

/// A cursor storage that wraps a transactional reference.
#[derive(Debug)]
pub(crate) struct CursorProvider<'tx, TX> {
    tx: &'tx TX,
}

impl<'tx, TX> CursorProvider<'tx, TX> {
    pub(crate) const fn new(tx: &'tx TX) -> Self {
        Self { tx }
    }
}

impl<TX> CursorProvider<'_, TX>
where
    TX: DbTx,
{
    /// Reads a cursor. A cursor that was never written is zero.
    pub(crate) fn get_cursor(&self, key: CursorKey) -> Result<u64, StorageError> {
        let value = self.tx.get::<Cursors>(key).inspect_err(|err| {
            error!(target: "block_store", ?key, %err, "Failed to read cursor");
        })?;
        Ok(value.map_or(0, |StoredHeight(height)| height))
    }
}

impl<TX> CursorProvider<'_, TX>
where
    TX: DbTxMut + DbTx,
{
    pub(crate) fn set_cursor(&self, key: CursorKey, height: u64) -> Result<(), StorageError> {
        self.tx.put::<Cursors>(key, StoredHeight(height)).inspect_err(|err| {
            error!(target: "block_store", ?key, height, %err, "Failed to write cursor");
        })?;
        Ok(())
    }

    /// Moves the height cursor to `requested`, which must directly follow the current height.
    pub(crate) fn advance_height(&self, requested: u64) -> Result<(), StorageError> {
        let current = self.get_cursor(CursorKey::Height)?;
        if current.checked_add(1) != Some(requested) {
            warn!(target: "block_store", current, requested, "Rejected non-contiguous height");
            return Err(StorageError::NonContiguousHeight { current, requested });
        }
        self.set_cursor(CursorKey::Height, requested)
    }
}

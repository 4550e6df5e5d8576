//! Provider for reading and writing blocks.

use crate::{
    StorageError,
    models::{BlockHashes, Blocks, StoredBlock, StoredHeight},
};
use alloy_primitives::B256;
use reth_db_api::transaction::{DbTx, DbTxMut};
use tracing::{debug, error, warn};

/// A block storage that wraps a transactional reference.
#[derive(Debug)]
pub(crate) struct BlockProvider<'tx, TX> {
    tx: &'tx TX,
}

impl<'tx, TX> BlockProvider<'tx, TX> {
    pub(crate) const fn new(tx: &'tx TX) -> Self {
        Self { tx }
    }
}

impl<TX> BlockProvider<'_, TX>
where
    TX: DbTx,
{
    pub(crate) fn get_block(&self, height: u64) -> Result<StoredBlock, StorageError> {
        let block = self.tx.get::<Blocks>(height).inspect_err(|err| {
            error!(target: "block_store", height, %err, "Failed to read block");
        })?;
        block.ok_or_else(|| {
            warn!(target: "block_store", height, "Block not found");
            StorageError::EntryNotFound(format!("block at height {height}"))
        })
    }

    pub(crate) fn get_height_by_hash(&self, hash: B256) -> Result<u64, StorageError> {
        let height = self.tx.get::<BlockHashes>(hash).inspect_err(|err| {
            error!(target: "block_store", %hash, %err, "Failed to read block hash index");
        })?;
        height.map(|StoredHeight(height)| height).ok_or_else(|| {
            warn!(target: "block_store", %hash, "Header hash not found");
            StorageError::EntryNotFound(format!("block with header hash {hash}"))
        })
    }
}

impl<TX> BlockProvider<'_, TX>
where
    TX: DbTxMut + DbTx,
{
    /// Saves a block and indexes its header hash.
    ///
    /// Returns `false` when the exact same block was already stored.
    pub(crate) fn save_block(&self, block: &StoredBlock) -> Result<bool, StorageError> {
        validate_block(block)?;
        let height = block.header.height;

        if let Some(existing) = self.tx.get::<Blocks>(height)? {
            if existing == *block {
                debug!(target: "block_store", height, "Block already stored");
                return Ok(false);
            }
            warn!(
                target: "block_store",
                height,
                existing = %existing.header.hash(),
                incoming = %block.header.hash(),
                "Conflicting block at stored height"
            );
            return Err(StorageError::ConflictError(format!(
                "a different block is already stored at height {height}"
            )));
        }

        let hash = block.header.hash();
        if let Some(StoredHeight(indexed)) = self.tx.get::<BlockHashes>(hash)? {
            warn!(target: "block_store", height, indexed, %hash, "Header hash already indexed");
            return Err(StorageError::ConflictError(format!(
                "header {hash} is already stored at height {indexed}"
            )));
        }

        self.tx.put::<Blocks>(height, block.clone()).inspect_err(|err| {
            error!(target: "block_store", height, %err, "Failed to store block");
        })?;
        self.tx.put::<BlockHashes>(hash, StoredHeight(height)).inspect_err(|err| {
            error!(target: "block_store", height, %hash, %err, "Failed to index header hash");
        })?;
        Ok(true)
    }
}

fn validate_block(block: &StoredBlock) -> Result<(), StorageError> {
    let StoredBlock { header, data, .. } = block;
    if header.height == 0 {
        return Err(StorageError::InvalidBlock("block heights start at 1".to_string()));
    }
    if data.height != header.height {
        return Err(StorageError::InvalidBlock(format!(
            "data height {} does not match header height {}",
            data.height, header.height
        )));
    }
    if data.chain_id != header.chain_id {
        return Err(StorageError::InvalidBlock(format!(
            "data chain id {} does not match header chain id {}",
            data.chain_id, header.chain_id
        )));
    }
    Ok(())
}

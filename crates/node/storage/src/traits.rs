use crate::StorageError;
use alloy_primitives::B256;
use rollnode_primitives::{BlockData, Header, Signature};

/// Read access to stored blocks and the height cursor.
///
/// Implementations are expected to provide persistent and thread-safe access to block data.
pub trait BlockStorageReader {
    /// Gets the block stored at `height`.
    ///
    /// # Returns
    /// * `Ok((Header, BlockData, Signature))` if a block is stored at the height.
    /// * `Err(StorageError::EntryNotFound)` if nothing is stored there.
    fn get_block_data(&self, height: u64) -> Result<(Header, BlockData, Signature), StorageError>;

    /// Gets the block whose header hashes to `hash`.
    fn get_block_by_hash(
        &self,
        hash: B256,
    ) -> Result<(Header, BlockData, Signature), StorageError>;

    /// Returns the height cursor: the highest height whose block has been saved and
    /// committed as part of the chain. Zero for an empty store.
    fn height(&self) -> u64;
}

/// Write access used by the block producer.
pub trait BlockStorageWriter {
    /// Atomically persists a header, its data and its signature.
    ///
    /// Saving the exact same block twice is a no-op. Saving a different block at a height
    /// that is already occupied fails with [`StorageError::ConflictError`] and leaves the
    /// stored block untouched.
    fn save_block_data(
        &self,
        header: &Header,
        data: &BlockData,
        signature: &Signature,
    ) -> Result<(), StorageError>;

    /// Advances the height cursor to `height`.
    ///
    /// The cursor only moves forward one height at a time, anything other than
    /// `current + 1` fails with [`StorageError::NonContiguousHeight`].
    fn set_height(&self, height: u64) -> Result<(), StorageError>;
}

/// Durable record of how far header submission has progressed.
pub trait SubmissionProgressStorage {
    /// Returns the height of the last header confirmed as submitted. Zero if none.
    fn last_submitted_height(&self) -> Result<u64, StorageError>;

    /// Persists the height of the last header confirmed as submitted.
    fn set_last_submitted_height(&self, height: u64) -> Result<(), StorageError>;
}

//! Fixtures for tests that need a populated block store.

use crate::{BlockStorageWriter, ChainDb, StorageError};
use rollnode_primitives::{BlockData, SignedHeader, test_utils::random_block};
use tempfile::TempDir;

/// Number of transactions in every generated block.
const TXS_PER_BLOCK: usize = 2;

/// Saves `count` random blocks on `chain_id` at heights `start_height..start_height + count`,
/// advancing the height cursor after each one.
///
/// The store height must be `start_height - 1` beforehand. Only the writer trait is used, so
/// any store implementation can be filled.
pub fn fill_block_store<S>(
    store: &S,
    chain_id: &str,
    start_height: u64,
    count: u64,
) -> Result<Vec<(SignedHeader, BlockData)>, StorageError>
where
    S: BlockStorageWriter + ?Sized,
{
    (start_height..start_height + count)
        .map(|height| {
            let (signed, data) = random_block(height, TXS_PER_BLOCK, chain_id);
            store.save_block_data(&signed.header, &data, &signed.signature)?;
            store.set_height(height)?;
            Ok((signed, data))
        })
        .collect()
}

/// Opens a fresh [`ChainDb`] in a temporary directory.
///
/// The directory is removed when the returned [`TempDir`] is dropped, so keep it alive for as
/// long as the database is used.
pub fn temp_chain_db() -> (TempDir, ChainDb) {
    let dir = TempDir::new().expect("Could not create temp dir");
    let db = ChainDb::new(&dir.path().join("chaindb")).expect("Failed to open chain db");
    (dir, db)
}

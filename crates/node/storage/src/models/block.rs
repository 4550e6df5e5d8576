//! Models for storing blocks in the database.
//!
//! A block is the `(header, data, signature)` triple produced at one height. Blocks are keyed
//! by height, and a secondary table maps header hashes back to heights.

use super::codec::{CompactReader, put_b256, put_bytes, put_str, put_u64};
use alloy_primitives::B256;
use bytes::BufMut;
use reth_db::{
    DatabaseError,
    table::{Compress, Decompress, Table},
};
use rollnode_primitives::{BlockData, Header, Signature};
use serde::{Deserialize, Serialize};

/// A block as it is persisted: the header, the payload and the proposer signature.
///
/// The three parts are always written and read together in one transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredBlock {
    /// The block header.
    pub header: Header,
    /// The block payload.
    pub data: BlockData,
    /// The proposer signature over the header.
    pub signature: Signature,
}

impl StoredBlock {
    /// Splits the stored block into its parts.
    pub fn into_parts(self) -> (Header, BlockData, Signature) {
        (self.header, self.data, self.signature)
    }
}

impl Compress for StoredBlock {
    type Compressed = Vec<u8>;

    fn compress_to_buf<B: BufMut + AsMut<[u8]>>(&self, buf: &mut B) {
        let Self { header, data, signature } = self;

        put_str(buf, &header.chain_id);
        put_u64(buf, header.height);
        put_u64(buf, header.time);
        put_b256(buf, &header.last_header_hash);
        put_b256(buf, &header.data_hash);
        put_b256(buf, &header.app_hash);
        put_bytes(buf, &header.proposer_address);

        put_str(buf, &data.chain_id);
        put_u64(buf, data.height);
        put_u64(buf, data.txs.len() as u64);
        for tx in &data.txs {
            put_bytes(buf, tx);
        }

        put_bytes(buf, &signature.0);
    }
}

impl Decompress for StoredBlock {
    fn decompress(value: &[u8]) -> Result<Self, DatabaseError> {
        let mut reader = CompactReader::new(value);

        let header = Header {
            chain_id: reader.read_string()?,
            height: reader.read_u64()?,
            time: reader.read_u64()?,
            last_header_hash: reader.read_b256()?,
            data_hash: reader.read_b256()?,
            app_hash: reader.read_b256()?,
            proposer_address: reader.read_bytes()?,
        };

        let chain_id = reader.read_string()?;
        let height = reader.read_u64()?;
        let num_txs = reader.read_u64()?;
        // Every transaction carries at least its length prefix.
        if num_txs > value.len() as u64 / 8 {
            return Err(DatabaseError::Decode);
        }
        let txs = (0..num_txs).map(|_| reader.read_bytes()).collect::<Result<Vec<_>, _>>()?;
        let data = BlockData { chain_id, height, txs };

        let signature = Signature::from(reader.read_bytes()?);
        reader.finish()?;

        Ok(Self { header, data, signature })
    }
}

/// The height a header hash was stored at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredHeight(pub u64);

impl Compress for StoredHeight {
    type Compressed = Vec<u8>;

    fn compress_to_buf<B: BufMut + AsMut<[u8]>>(&self, buf: &mut B) {
        put_u64(buf, self.0);
    }
}

impl Decompress for StoredHeight {
    fn decompress(value: &[u8]) -> Result<Self, DatabaseError> {
        let mut reader = CompactReader::new(value);
        let height = reader.read_u64()?;
        reader.finish()?;
        Ok(Self(height))
    }
}

/// A table for storing blocks by height.
///
/// This is a standard table (not dup-sorted) where:
/// - **Key**: `u64`: block height
/// - **Value**: [`StoredBlock`]: header, data and signature
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Blocks;

impl Table for Blocks {
    const NAME: &'static str = "blocks";
    const DUPSORT: bool = false;
    type Key = u64;
    type Value = StoredBlock;
}

/// Index from header hash to block height.
///
/// - **Key**: [`B256`]: header hash
/// - **Value**: [`StoredHeight`]: height of the block carrying the header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct BlockHashes;

impl Table for BlockHashes {
    const NAME: &'static str = "block_hashes";
    const DUPSORT: bool = false;
    type Key = B256;
    type Value = StoredHeight;
}

//! Block payloads.

use alloy_primitives::{B256, Bytes};
use sha2::{Digest, Sha256};

/// The payload of a rollup block.
///
/// Stored and retrieved atomically together with its [`Header`](crate::Header) and
/// [`Signature`](crate::Signature).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData {
    /// The chain this payload belongs to.
    pub chain_id: String,
    /// The height of the block carrying this payload.
    pub height: u64,
    /// The raw transactions of the block.
    pub txs: Vec<Bytes>,
}

impl BlockData {
    /// Returns the hash committed to by [`Header::data_hash`](crate::Header::data_hash).
    pub fn hash(&self) -> B256 {
        let mut hasher = Sha256::new();
        hasher.update((self.txs.len() as u64).to_be_bytes());
        for tx in &self.txs {
            hasher.update((tx.len() as u64).to_be_bytes());
            hasher.update(tx);
        }
        B256::from_slice(&hasher.finalize())
    }

    /// Returns `true` if the block carries no transactions.
    pub fn is_empty(&self) -> bool {
        self.txs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::bytes;

    #[test]
    fn test_hash_depends_on_tx_boundaries() {
        let joined = BlockData { txs: vec![bytes!("01020304")], ..Default::default() };
        let split =
            BlockData { txs: vec![bytes!("0102"), bytes!("0304")], ..Default::default() };
        assert_ne!(joined.hash(), split.hash());
    }

    #[test]
    fn test_hash_ignores_metadata() {
        let a = BlockData { chain_id: "a".into(), height: 1, txs: vec![bytes!("aa")] };
        let b = BlockData { chain_id: "b".into(), height: 2, txs: vec![bytes!("aa")] };
        assert_eq!(a.hash(), b.hash());
    }

    #[test]
    fn test_empty_payload() {
        let data = BlockData::default();
        assert!(data.is_empty());
        assert_ne!(data.hash(), B256::ZERO);
    }
}

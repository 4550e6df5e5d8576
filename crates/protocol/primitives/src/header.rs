//! Rollup block headers.

use crate::{Signature, header_id};
use alloy_primitives::{B256, Bytes};
use sha2::{Digest, Sha256};

/// The header of a single rollup block.
///
/// Heights form a gapless increasing sequence starting at 1 for a given chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// The chain this block belongs to.
    pub chain_id: String,
    /// The height of the block.
    pub height: u64,
    /// The block time, in nanoseconds since the Unix epoch.
    pub time: u64,
    /// The hash of the previous header.
    pub last_header_hash: B256,
    /// The hash of the block data, see [`BlockData::hash`](crate::BlockData::hash).
    pub data_hash: B256,
    /// The application state root after executing the block.
    pub app_hash: B256,
    /// The identity of the block proposer.
    pub proposer_address: Bytes,
}

impl Header {
    /// Returns the content hash of the header.
    ///
    /// Every field is committed to; variable-length fields are length-prefixed so that no two
    /// distinct headers share a preimage.
    pub fn hash(&self) -> B256 {
        let mut hasher = Sha256::new();
        hasher.update((self.chain_id.len() as u64).to_be_bytes());
        hasher.update(self.chain_id.as_bytes());
        hasher.update(self.height.to_be_bytes());
        hasher.update(self.time.to_be_bytes());
        hasher.update(self.last_header_hash);
        hasher.update(self.data_hash);
        hasher.update(self.app_hash);
        hasher.update((self.proposer_address.len() as u64).to_be_bytes());
        hasher.update(&self.proposer_address);
        B256::from_slice(&hasher.finalize())
    }

    /// Returns the identifier of the header, derived from its height and proposer only.
    pub fn id(&self) -> B256 {
        header_id(self.height, &self.proposer_address)
    }
}

/// A [`Header`] together with the proposer's [`Signature`] over it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignedHeader {
    /// The header.
    pub header: Header,
    /// The signature over the header.
    pub signature: Signature,
}

impl SignedHeader {
    /// Creates a new [`SignedHeader`].
    pub const fn new(header: Header, signature: Signature) -> Self {
        Self { header, signature }
    }

    /// Returns the height of the header.
    pub const fn height(&self) -> u64 {
        self.header.height
    }

    /// Returns the content hash of the header.
    pub fn hash(&self) -> B256 {
        self.header.hash()
    }
}

impl core::fmt::Display for SignedHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} #{} ({})", self.header.chain_id, self.header.height, self.hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::bytes;

    fn header(height: u64) -> Header {
        Header {
            chain_id: "test-chain".to_string(),
            height,
            time: 1_700_000_000_000_000_000,
            last_header_hash: B256::repeat_byte(0x11),
            data_hash: B256::repeat_byte(0x22),
            app_hash: B256::repeat_byte(0x33),
            proposer_address: bytes!("0102030405060708090a0b0c0d0e0f1011121314"),
        }
    }

    #[test]
    fn test_hash_commits_to_every_field() {
        let base = header(5);
        let hash = base.hash();

        let variants = [
            Header { chain_id: "other-chain".to_string(), ..base.clone() },
            Header { height: 6, ..base.clone() },
            Header { time: base.time + 1, ..base.clone() },
            Header { last_header_hash: B256::repeat_byte(0x44), ..base.clone() },
            Header { data_hash: B256::repeat_byte(0x44), ..base.clone() },
            Header { app_hash: B256::repeat_byte(0x44), ..base.clone() },
            Header { proposer_address: Bytes::new(), ..base.clone() },
        ];
        for variant in variants {
            assert_ne!(variant.hash(), hash, "hash ignores a field: {variant:?}");
        }
        assert_eq!(base.hash(), hash);
    }

    #[test]
    fn test_hash_length_prefix_disambiguates() {
        let a = Header { chain_id: "ab".to_string(), ..Default::default() };
        let b = Header { chain_id: "a".to_string(), ..Default::default() };
        assert_ne!(a.hash(), b.hash());
    }

    #[test]
    fn test_id_uses_height_and_proposer() {
        let header = header(9);
        assert_eq!(header.id(), header_id(9, &header.proposer_address));

        let retimed = Header { time: 0, ..header.clone() };
        assert_eq!(retimed.id(), header.id());
        assert_ne!(retimed.hash(), header.hash());
    }

    #[test]
    fn test_signed_header_accessors() {
        let signed = SignedHeader::new(header(3), Signature::from(bytes!("deadbeef")));
        assert_eq!(signed.height(), 3);
        assert_eq!(signed.hash(), signed.header.hash());
        assert!(signed.to_string().starts_with("test-chain #3 (0x"));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_signed_header_serde() {
        let signed = SignedHeader::new(header(3), Signature::from(bytes!("deadbeef")));
        let json = serde_json::to_string(&signed).unwrap();
        let decoded: SignedHeader = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, signed);
    }
}

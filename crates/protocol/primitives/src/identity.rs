//! Header identity function.
//!
//! Produces the identifier a header is expected to carry from its height and proposer alone,
//! without materializing the header itself.

use alloy_primitives::B256;
use sha2::{Digest, Sha256};

/// Domain separation prefix for header identifiers.
///
/// The value is part of the identifier format; changing it changes every identifier.
pub const HEADER_ID_DOMAIN: &[u8] = b"testheader:";

/// Computes the identifier of the header produced by `proposer` at `height`.
///
/// The identifier is `sha256(HEADER_ID_DOMAIN || height_be || proposer)`. An empty proposer
/// is hashed as a zero-length suffix.
pub fn header_id(height: u64, proposer: &[u8]) -> B256 {
    let mut hasher = Sha256::new();
    hasher.update(HEADER_ID_DOMAIN);
    hasher.update(height.to_be_bytes());
    hasher.update(proposer);
    B256::from_slice(&hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_header_id_is_deterministic() {
        let proposer = [0xAA; 20];
        assert_eq!(header_id(42, &proposer), header_id(42, &proposer));
    }

    #[test]
    fn test_header_id_matches_manual_digest() {
        let proposer = b"proposer";
        let mut preimage = Vec::new();
        preimage.extend_from_slice(b"testheader:");
        preimage.extend_from_slice(&7u64.to_be_bytes());
        preimage.extend_from_slice(proposer);

        let expected = B256::from_slice(&Sha256::digest(&preimage));
        assert_eq!(header_id(7, proposer), expected);
    }

    #[test]
    fn test_header_id_empty_proposer() {
        // sha256("testheader:" || 0u64)
        let mut preimage = b"testheader:".to_vec();
        preimage.extend_from_slice(&[0u8; 8]);
        let expected = B256::from_slice(&Sha256::digest(&preimage));

        assert_eq!(header_id(0, &[]), expected);
        assert_ne!(header_id(0, &[]), B256::ZERO);
    }

    #[test]
    fn test_header_id_changes_with_inputs() {
        let proposer_a = [0x01; 20];
        let proposer_b = [0x02; 20];

        assert_ne!(header_id(1, &proposer_a), header_id(2, &proposer_a));
        assert_ne!(header_id(1, &proposer_a), header_id(1, &proposer_b));
    }

    #[test]
    fn test_header_id_no_collisions_in_sample() {
        let proposers: [&[u8]; 3] = [&[], &[0x01; 20], &[0x02; 32]];
        let mut seen = HashSet::new();
        for proposer in proposers {
            for height in 0..500u64 {
                assert!(seen.insert(header_id(height, proposer)), "collision at height {height}");
            }
        }
        assert_eq!(seen.len(), 1500);
    }
}

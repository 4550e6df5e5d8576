//! Random block generation for tests.

use crate::{BlockData, Header, Signature, SignedHeader};
use alloy_primitives::{B256, Bytes};
use rand::Rng;

/// Generates a random block at `height` on `chain_id` with `num_txs` random transactions.
///
/// The header's `data_hash` commits to the generated payload. The signature is random bytes
/// of signature length and carries no cryptographic meaning.
pub fn random_block(height: u64, num_txs: usize, chain_id: &str) -> (SignedHeader, BlockData) {
    let mut rng = rand::rng();

    let txs = (0..num_txs)
        .map(|_| {
            let len = rng.random_range(32..=128);
            random_bytes(&mut rng, len)
        })
        .collect();
    let data = BlockData { chain_id: chain_id.to_string(), height, txs };

    let header = Header {
        chain_id: chain_id.to_string(),
        height,
        time: rng.random(),
        last_header_hash: B256::from(rng.random::<[u8; 32]>()),
        data_hash: data.hash(),
        app_hash: B256::from(rng.random::<[u8; 32]>()),
        proposer_address: random_bytes(&mut rng, 20),
    };
    let signature = Signature::from(random_bytes(&mut rng, 64));

    (SignedHeader::new(header, signature), data)
}

fn random_bytes<R: Rng>(rng: &mut R, len: usize) -> Bytes {
    let mut bytes = vec![0u8; len];
    rng.fill(bytes.as_mut_slice());
    bytes.into()
}

//! Proposer signatures.

use alloy_primitives::Bytes;
use derive_more::{Deref, Display, From};

/// A signature bound to a [`Header`](crate::Header).
///
/// The bytes are opaque to this crate and never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash, Deref, Display, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display("{_0}")]
pub struct Signature(pub Bytes);

impl Signature {
    /// Returns the raw signature bytes.
    pub const fn as_bytes(&self) -> &Bytes {
        &self.0
    }
}

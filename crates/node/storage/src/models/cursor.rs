//! Models for the durable progress cursors.

use super::StoredHeight;
use reth_db::{
    DatabaseError,
    table::{Decode, Encode, Table},
};
use serde::{Deserialize, Serialize};

/// Names one of the durable cursors kept next to the blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CursorKey {
    /// Highest height whose block has been saved and committed to the chain.
    Height,
    /// Highest height confirmed as submitted to the data availability layer.
    LastSubmittedHeader,
}

impl Encode for CursorKey {
    type Encoded = [u8; 1];

    fn encode(self) -> Self::Encoded {
        match self {
            Self::Height => [0],
            Self::LastSubmittedHeader => [1],
        }
    }
}

impl Decode for CursorKey {
    fn decode(value: &[u8]) -> Result<Self, DatabaseError> {
        match value {
            [0] => Ok(Self::Height),
            [1] => Ok(Self::LastSubmittedHeader),
            _ => Err(DatabaseError::Decode),
        }
    }
}

/// A table for the progress cursors.
///
/// - **Key**: [`CursorKey`]
/// - **Value**: [`StoredHeight`]
///
/// A cursor that was never written reads as height zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Cursors;

impl Table for Cursors {
    const NAME: &'static str = "cursors";
    const DUPSORT: bool = false;
    type Key = CursorKey;
    type Value = StoredHeight;
}

//! Persistent block storage for the rollnode rollup node.
//!
//! Blocks are stored as `(header, data, signature)` triples keyed by height, next to two
//! durable cursors: the height of the last saved block and the height of the last header
//! confirmed as submitted to the data availability layer.
//!
//! [`ChainDb`] implements the storage traits on top of reth's MDBX abstraction.

mod error;
pub use error::StorageError;

pub mod models;
pub use models::CursorKey;

mod providers;

mod traits;
pub use traits::{BlockStorageReader, BlockStorageWriter, SubmissionProgressStorage};

mod chaindb;
pub use chaindb::ChainDb;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

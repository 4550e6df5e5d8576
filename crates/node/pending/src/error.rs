//! Errors raised by the pending header tracker.

use rollnode_storage::StorageError;
use thiserror::Error;

/// Errors returned by [`PendingHeaders`](crate::PendingHeaders).
#[derive(Debug, Error)]
pub enum PendingHeadersError {
    /// The block store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A height inside the pending range has no stored block.
    #[error("Header at height {height} is missing from the store")]
    MissingHeader {
        /// The height that could not be loaded.
        height: u64,
    },

    /// The submitted height lies outside `[confirmed, height]`.
    #[error(
        "Cannot mark height {requested} as submitted: last submitted height is {confirmed}, store height is {height}"
    )]
    InvalidSubmittedHeight {
        /// The height passed to `mark_submitted`.
        requested: u64,
        /// The last submitted height at the time of the call.
        confirmed: u64,
        /// The store height at the time of the call.
        height: u64,
    },

    /// The persisted last submitted height is above the store height.
    #[error("Last submitted height {confirmed} is above the store height {height}")]
    InconsistentState {
        /// The persisted last submitted height.
        confirmed: u64,
        /// The store height.
        height: u64,
    },
}

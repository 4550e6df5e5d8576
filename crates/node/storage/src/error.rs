use reth_db::DatabaseError;
use thiserror::Error;

/// Errors that may occur while interacting with block storage.
///
/// This enum is used across all implementations of the storage traits.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying database rejected an operation.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// The database environment could not be opened or created.
    #[error("Failed to initialize database: {0}")]
    DatabaseInit(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The expected entry was not found in the database.
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// A different entry already exists where the write was attempted.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// The height cursor may only advance by exactly one.
    #[error("Non-contiguous height: current height is {current}, requested {requested}")]
    NonContiguousHeight {
        /// The height cursor before the attempted update.
        current: u64,
        /// The height that was requested.
        requested: u64,
    },

    /// The block triple is internally inconsistent.
    #[error("Invalid block: {0}")]
    InvalidBlock(String),
}

//! The data availability client seam.

use async_trait::async_trait;
use rollnode_primitives::SignedHeader;
use thiserror::Error;

/// Errors reported by a [`DaClient`].
#[derive(Debug, Error)]
pub enum DaClientError {
    /// The data availability layer could not be reached.
    #[error("Data availability layer unavailable: {0}")]
    Unavailable(String),
    /// The data availability layer refused the submission.
    #[error("Submission rejected: {0}")]
    Rejected(String),
}

/// Client for the data availability layer headers are submitted to.
#[async_trait]
pub trait DaClient: Send + Sync {
    /// Submits `headers`, ordered by height.
    ///
    /// Returns how many headers, counted from the start of the slice, were accepted. Headers
    /// after that prefix are considered not submitted and will be offered again.
    async fn submit_headers(&self, headers: &[SignedHeader]) -> Result<usize, DaClientError>;
}

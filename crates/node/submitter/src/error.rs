use crate::DaClientError;
use rollnode_pending::PendingHeadersError;
use thiserror::Error;

/// Errors raised by a submission round.
#[derive(Debug, Error)]
pub enum SubmitterError {
    /// The pending header tracker failed.
    #[error(transparent)]
    Pending(#[from] PendingHeadersError),

    /// The data availability client failed.
    #[error(transparent)]
    DaClient(#[from] DaClientError),

    /// No header is pending.
    #[error("No pending headers to submit")]
    NothingToSubmit,

    /// The client reported more accepted headers than it was given.
    #[error("Client accepted {accepted} headers out of {submitted}")]
    InvalidAcceptedCount {
        /// The count reported by the client.
        accepted: usize,
        /// The number of headers submitted.
        submitted: usize,
    },
}

impl SubmitterError {
    /// Returns `true` if the error cannot clear without operator intervention.
    ///
    /// A gap in the pending range or a last submitted height above the store height means the
    /// store itself is inconsistent, so resubmitting would fail the same way every round.
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Pending(
                PendingHeadersError::MissingHeader { .. } |
                    PendingHeadersError::InconsistentState { .. }
            )
        )
    }
}

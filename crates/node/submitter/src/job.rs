//! The header submission loop.

use crate::{DaClient, Metrics, SubmitterConfig, SubmitterError};
use rollnode_pending::PendingHeaders;
use rollnode_primitives::SignedHeader;
use rollnode_storage::{BlockStorageReader, SubmissionProgressStorage};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, error, info, info_span, warn};

/// A background job that submits pending headers to the data availability layer.
///
/// Each round takes up to [`SubmitterConfig::max_headers_per_submission`] pending headers,
/// hands them to the [`DaClient`] and marks the accepted prefix as submitted before the next
/// round starts. Nothing is retried inside a round; failed headers stay pending and are picked
/// up again after [`SubmitterConfig::interval`].
#[derive(Debug)]
pub struct HeaderSubmissionJob<S, D> {
    pending: Arc<PendingHeaders<S>>,
    client: Arc<D>,
    config: SubmitterConfig,
    cancel_token: CancellationToken,
}

impl<S, D> HeaderSubmissionJob<S, D>
where
    S: BlockStorageReader + SubmissionProgressStorage + Send + Sync + 'static,
    D: DaClient + 'static,
{
    /// Initializes the [`HeaderSubmissionJob`].
    pub const fn new(
        pending: Arc<PendingHeaders<S>>,
        client: Arc<D>,
        config: SubmitterConfig,
        cancel_token: CancellationToken,
    ) -> Self {
        Self { pending, client, config, cancel_token }
    }

    /// Runs submission rounds until the [`CancellationToken`] is triggered.
    ///
    /// A round that accepted headers but left some pending is followed immediately by the next
    /// one. Otherwise the job waits for the configured interval. Errors that need operator
    /// intervention (see [`SubmitterError::is_fatal`]) stop the job and are returned.
    pub async fn run(self) -> Result<(), SubmitterError> {
        info!(
            target: "header_submitter",
            interval = ?self.config.interval,
            max_headers = self.config.max_headers_per_submission,
            "Started header submitter"
        );

        loop {
            tokio::select! {
                _ = self.cancel_token.cancelled() => {
                    info!(target: "header_submitter", "Cancelled header submitter");
                    break;
                }

                result = self.round() => result?,
            }
        }

        info!(target: "header_submitter", "Stopped header submitter");
        Ok(())
    }

    async fn round(&self) -> Result<(), SubmitterError> {
        let idle = match self.submit_pending().await {
            Ok(0) | Err(SubmitterError::NothingToSubmit) => true,
            Ok(_) => self.pending.is_empty(),
            Err(err) if err.is_fatal() => {
                error!(target: "header_submitter", %err, "Halted header submitter");
                return Err(err);
            }
            Err(err) => {
                warn!(target: "header_submitter", %err, "Header submission failed");
                true
            }
        };
        if idle {
            tokio::time::sleep(self.config.interval).await;
        }
        Ok(())
    }

    /// Runs a single submission round and returns the number of accepted headers.
    pub async fn submit_pending(&self) -> Result<usize, SubmitterError> {
        let headers = self
            .pending
            .pending_headers()
            .take(self.config.max_headers_per_submission.max(1))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|_| Metrics::record_error())?;

        let (Some(first), Some(last)) = (headers.first(), headers.last()) else {
            debug!(target: "header_submitter", "No pending headers");
            return Err(SubmitterError::NothingToSubmit);
        };
        let span = info_span!(
            target: "header_submitter",
            "submission",
            from = first.height(),
            to = last.height()
        );

        self.submit(&headers)
            .instrument(span)
            .await
            .inspect_err(|_| Metrics::record_error())
    }

    async fn submit(&self, headers: &[SignedHeader]) -> Result<usize, SubmitterError> {
        let accepted = self.client.submit_headers(headers).await.inspect_err(|err| {
            warn!(target: "header_submitter", %err, "Data availability client failed");
        })?;

        if accepted > headers.len() {
            warn!(
                target: "header_submitter",
                accepted,
                submitted = headers.len(),
                "Client accepted more headers than submitted"
            );
            return Err(SubmitterError::InvalidAcceptedCount {
                accepted,
                submitted: headers.len(),
            });
        }
        let Some(last) = accepted.checked_sub(1).map(|index| &headers[index]) else {
            warn!(target: "header_submitter", submitted = headers.len(), "No headers accepted");
            return Ok(0);
        };

        self.pending.mark_submitted(last.height())?;
        info!(
            target: "header_submitter",
            accepted,
            submitted = headers.len(),
            height = last.height(),
            "Submitted headers"
        );
        Metrics::record_submitted(accepted);
        Ok(accepted)
    }
}

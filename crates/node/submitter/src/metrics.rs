//! Metrics for the header submitter.

/// Container for the metrics of the header submitter.
#[derive(Debug, Clone)]
pub struct Metrics;

impl Metrics {
    /// Counter: headers accepted by the data availability layer.
    pub const SUBMITTED_HEADERS_TOTAL: &'static str = "rollnode_submitted_headers_total";
    /// Counter: failed submission rounds.
    pub const SUBMISSION_ERRORS_TOTAL: &'static str = "rollnode_submission_errors_total";

    /// Describes the submitter metrics and initializes them to 0.
    pub fn init() {
        #[cfg(feature = "metrics")]
        {
            metrics::describe_counter!(
                Self::SUBMITTED_HEADERS_TOTAL,
                metrics::Unit::Count,
                "Total number of headers accepted by the data availability layer"
            );
            metrics::describe_counter!(
                Self::SUBMISSION_ERRORS_TOTAL,
                metrics::Unit::Count,
                "Total number of failed header submission rounds"
            );
            metrics::counter!(Self::SUBMITTED_HEADERS_TOTAL).increment(0);
            metrics::counter!(Self::SUBMISSION_ERRORS_TOTAL).increment(0);
        }
    }

    #[cfg_attr(not(feature = "metrics"), allow(unused_variables))]
    pub(crate) fn record_submitted(count: usize) {
        #[cfg(feature = "metrics")]
        metrics::counter!(Self::SUBMITTED_HEADERS_TOTAL).increment(count as u64);
    }

    pub(crate) fn record_error() {
        #[cfg(feature = "metrics")]
        metrics::counter!(Self::SUBMISSION_ERRORS_TOTAL).increment(1);
    }
}

//! Metrics for the pending header tracker.

use crate::PendingRange;

/// Container for the metrics of the pending header tracker.
///
/// Recording is a no-op unless the `metrics` feature is enabled.
#[derive(Debug, Clone)]
pub struct Metrics;

impl Metrics {
    /// Gauge: number of headers waiting for submission.
    pub const PENDING_HEADERS: &'static str = "rollnode_pending_headers";
    /// Gauge: height of the last header confirmed as submitted.
    pub const LAST_SUBMITTED_HEIGHT: &'static str = "rollnode_last_submitted_height";
    /// Gauge: height of the block store.
    pub const STORE_HEIGHT: &'static str = "rollnode_store_height";

    /// Initializes metrics for the pending header tracker.
    ///
    /// This does two things:
    /// * Describes the metrics.
    /// * Initializes them to 0 so they can be queried immediately.
    pub fn init() {
        #[cfg(feature = "metrics")]
        {
            Self::describe();
            Self::zero();
        }
    }

    #[cfg(feature = "metrics")]
    fn describe() {
        metrics::describe_gauge!(
            Self::PENDING_HEADERS,
            metrics::Unit::Count,
            "Number of stored headers not yet submitted to the data availability layer"
        );
        metrics::describe_gauge!(
            Self::LAST_SUBMITTED_HEIGHT,
            metrics::Unit::Count,
            "Height of the last header confirmed as submitted"
        );
        metrics::describe_gauge!(
            Self::STORE_HEIGHT,
            metrics::Unit::Count,
            "Height of the local block store"
        );
    }

    #[cfg(feature = "metrics")]
    fn zero() {
        metrics::gauge!(Self::PENDING_HEADERS).set(0);
        metrics::gauge!(Self::LAST_SUBMITTED_HEIGHT).set(0);
        metrics::gauge!(Self::STORE_HEIGHT).set(0);
    }

    /// Records the given pending range.
    #[cfg_attr(not(feature = "metrics"), allow(unused_variables))]
    pub fn record_range(range: &PendingRange) {
        #[cfg(feature = "metrics")]
        {
            metrics::gauge!(Self::PENDING_HEADERS).set(range.len() as f64);
            metrics::gauge!(Self::LAST_SUBMITTED_HEIGHT).set(range.from.saturating_sub(1) as f64);
            metrics::gauge!(Self::STORE_HEIGHT).set(range.to as f64);
        }
    }
}

//! Header submission for the rollnode rollup node.
//!
//! [`HeaderSubmissionJob`] periodically drains [`PendingHeaders`](rollnode_pending::PendingHeaders)
//! into a [`DaClient`] and reports accepted headers back to the tracker.

mod client;
pub use client::{DaClient, DaClientError};

mod config;
pub use config::SubmitterConfig;

mod error;
pub use error::SubmitterError;

mod job;
pub use job::HeaderSubmissionJob;

mod metrics;
pub use metrics::Metrics;

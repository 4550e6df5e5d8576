use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for [`HeaderSubmissionJob`](crate::HeaderSubmissionJob).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitterConfig {
    /// Delay between submission rounds once the pending set is drained or a round failed.
    pub interval: Duration,
    /// Maximum number of headers sent in a single submission.
    pub max_headers_per_submission: usize,
}

impl SubmitterConfig {
    /// Default delay between submission rounds.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);
    /// Default maximum number of headers per submission.
    pub const DEFAULT_MAX_HEADERS_PER_SUBMISSION: usize = 32;
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            interval: Self::DEFAULT_INTERVAL,
            max_headers_per_submission: Self::DEFAULT_MAX_HEADERS_PER_SUBMISSION,
        }
    }
}

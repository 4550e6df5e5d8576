//! Pending header tracking for the rollnode rollup node.
//!
//! A header is *pending* once its block has been saved to the local store and the store height
//! has reached it, and stays pending until the submission driver reports it as accepted by the
//! data availability layer. [`PendingHeaders`] derives the pending set from two durable
//! cursors (the store height and the last submitted height) and never caches header content,
//! so its view survives restarts unchanged.

mod error;
pub use error::PendingHeadersError;

mod range;
pub use range::PendingRange;

mod tracker;
pub use tracker::{PendingHeaders, PendingHeadersIter};

mod metrics;
pub use metrics::Metrics;

#[cfg(test)]
mod test_utils;

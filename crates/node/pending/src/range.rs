//! The range of pending heights.

use core::{fmt, ops::RangeInclusive};
use derive_more::Constructor;

/// The inclusive range of heights whose headers are stored but not yet submitted.
///
/// `from` is one above the last submitted height and `to` is the store height. The range is
/// empty when `from > to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Constructor)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingRange {
    /// The first pending height.
    pub from: u64,
    /// The last pending height.
    pub to: u64,
}

impl PendingRange {
    /// Returns `true` if no height is pending.
    pub const fn is_empty(&self) -> bool {
        self.from > self.to
    }

    /// Returns the number of pending heights.
    pub const fn len(&self) -> u64 {
        if self.is_empty() { 0 } else { self.to - self.from + 1 }
    }

    /// Returns `true` if `height` is pending.
    pub const fn contains(&self, height: u64) -> bool {
        self.from <= height && height <= self.to
    }

    /// Returns the pending heights in increasing order.
    pub const fn heights(&self) -> RangeInclusive<u64> {
        self.from..=self.to
    }
}

impl fmt::Display for PendingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "none (next {})", self.from)
        } else {
            write!(f, "{}..={}", self.from, self.to)
        }
    }
}

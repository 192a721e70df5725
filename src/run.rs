//! A single run of consecutive recorded values.

use std::ops::RangeInclusive;

/// One maximal block of consecutive values, `[value, value + count)`.
///
/// `index` is the number of recorded values in all earlier runs, i.e. the
/// position of `value` among every recorded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub(crate) value: u32,
    pub(crate) index: u64,
    pub(crate) count: u64,
}

impl Run {
    pub(crate) fn new(value: u32, index: u64, count: u64) -> Self {
        Self {
            value,
            index,
            count,
        }
    }

    /// First (smallest) value in the run.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Number of recorded values before this run.
    #[must_use]
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Number of consecutive values in this run. Never zero.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// One past the last value in the run.
    ///
    /// Widened to `u64` so a run ending at `u32::MAX` has a representable end.
    #[must_use]
    pub fn end(&self) -> u64 {
        u64::from(self.value) + self.count
    }

    /// Last (largest) value in the run.
    #[must_use]
    pub fn last(&self) -> u32 {
        // end - 1 <= u32::MAX for any run built from u32 values
        (self.end() - 1) as u32
    }

    /// Return true if `x` lies inside the run.
    #[must_use]
    pub fn contains(&self, x: u32) -> bool {
        self.value <= x && u64::from(x) < self.end()
    }

    /// The values covered by the run.
    #[must_use]
    pub fn values(&self) -> RangeInclusive<u32> {
        self.value..=self.last()
    }
}

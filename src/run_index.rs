//! Run-length index over a semi-dense set of `u32` values.
//!
//! Values are stored as an ordered table of [`Run`]s. Each run remembers its
//! first value, its length, and the number of recorded values in all earlier
//! runs, so rank queries need one binary search over the table.
//!
//! # Invariants
//!
//! After every mutation, for consecutive runs `a`, `b`:
//! - `a.value < b.value`
//! - `a.end() < b.value` (runs never touch or overlap)
//! - `b.index == a.index + a.count`, and the first run has `index == 0`
//! - no run has `count == 0`
//!
//! # Cost
//!
//! | operation | cost |
//! |---|---|
//! | `push` at or past the tail | $O(1)$ amortized |
//! | `push` before the tail | $O(r)$, `r` = number of runs |
//! | `index_of`, `lower_bound`, `select`, `contains` | $O(\log r)$ |
//! | `min`, `max`, `len` | $O(1)$ |
//!
//! The table is a plain `Vec`. Interior inserts shift every later run by one
//! slot and bump its cumulative index; the structure is tuned for data that
//! arrives mostly in order.

use tracing::trace;

use crate::error::{Error, Result};
use crate::run::Run;
use crate::search::lower_bound;

/// An ordered set of `u32` values stored as runs of consecutive values.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RunIndex {
    runs: Vec<Run>,
}

impl std::fmt::Debug for RunIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunIndex")
            .field("len", &self.len())
            .field("runs", &self.runs.len())
            .finish()
    }
}

impl RunIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with room for `runs` runs before reallocating.
    #[must_use]
    pub fn with_capacity(runs: usize) -> Self {
        Self {
            runs: Vec::with_capacity(runs),
        }
    }

    /// Smallest recorded value.
    pub fn min(&self) -> Result<u32> {
        self.runs.first().map(Run::value).ok_or(Error::Empty)
    }

    /// Largest recorded value.
    pub fn max(&self) -> Result<u32> {
        self.runs.last().map(Run::last).ok_or(Error::Empty)
    }

    /// Number of recorded values.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.runs.last().map_or(0, |r| r.index + r.count)
    }

    /// Return true if no value has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Number of runs in the table.
    #[must_use]
    pub fn num_runs(&self) -> usize {
        self.runs.len()
    }

    /// The run table, ascending by value.
    #[must_use]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Approximate heap memory usage in bytes.
    #[must_use]
    pub fn heap_bytes(&self) -> usize {
        self.runs.capacity() * std::mem::size_of::<Run>()
    }

    /// Reserve room for at least `additional` more runs.
    pub fn reserve(&mut self, additional: usize) {
        self.runs.reserve(additional);
    }

    /// Release unused run-table capacity.
    pub fn shrink_to_fit(&mut self) {
        self.runs.shrink_to_fit();
    }

    /// Remove every recorded value.
    pub fn clear(&mut self) {
        self.runs.clear();
    }

    /// Return the position in the run table of the first run that ends after
    /// `x`.
    ///
    /// That run either contains `x` or starts after it. Returns
    /// [`num_runs`](Self::num_runs) when `x` is past the maximum or the index
    /// is empty.
    #[must_use]
    pub fn lower_bound(&self, x: u32) -> usize {
        let x = u64::from(x);
        lower_bound(&self.runs, |r| x < r.end())
    }

    /// Return the number of recorded values strictly less than `x`.
    #[must_use]
    pub fn index_of(&self, x: u32) -> u64 {
        match self.runs.get(self.lower_bound(x)) {
            Some(run) if x <= run.value => run.index,
            Some(run) => u64::from(x - run.value) + run.index,
            None => self.len(),
        }
    }

    /// Return the position of `x` among recorded values, if it is recorded.
    #[must_use]
    pub fn position(&self, x: u32) -> Option<u64> {
        self.run_containing(x)
            .map(|run| u64::from(x - run.value) + run.index)
    }

    /// Return the run that contains `x`, if any.
    #[must_use]
    pub fn run_containing(&self, x: u32) -> Option<&Run> {
        self.runs
            .get(self.lower_bound(x))
            .filter(|run| run.value <= x)
    }

    /// Return true if `x` has been recorded.
    #[must_use]
    pub fn contains(&self, x: u32) -> bool {
        self.run_containing(x).is_some()
    }

    /// Return the `k`-th smallest recorded value (0-indexed).
    pub fn select(&self, k: u64) -> Result<u32> {
        if k >= self.len() {
            return Err(Error::IndexOutOfBounds(k));
        }
        let i = lower_bound(&self.runs, |r| k < r.index + r.count);
        let run = self.runs.get(i).ok_or(Error::IndexOutOfBounds(k))?;
        // k - run.index < run.count, and value + count - 1 fits in u32
        Ok(run.value + (k - run.index) as u32)
    }

    /// Iterate over every recorded value in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.runs.iter().flat_map(Run::values)
    }

    /// Record `x`. Values already present are ignored.
    pub fn push(&mut self, x: u32) {
        self.insert(x);
    }

    /// Record `x`, returning true if it was not already present.
    pub fn insert(&mut self, x: u32) -> bool {
        let wide = u64::from(x);
        let Some(last) = self.runs.last_mut() else {
            self.runs.push(Run::new(x, 0, 1));
            return true;
        };

        let end = last.end();
        if wide == end {
            last.count += 1;
            return true;
        }
        if wide > end {
            let index = last.index + last.count;
            self.runs.push(Run::new(x, index, 1));
            return true;
        }

        self.insert_interior(x)
    }

    /// Insert `x` somewhere before the end of the last run.
    fn insert_interior(&mut self, x: u32) -> bool {
        let mut n = self.lower_bound(x);
        debug_assert!(n < self.runs.len(), "x is below the tail end");
        let Some(&next) = self.runs.get(n) else {
            return false;
        };
        if x >= next.value {
            return false;
        }

        // x < next.value, so x + 1 cannot overflow
        let joins_next = x + 1 == next.value;
        let joins_prev = n > 0 && u64::from(x) == self.runs[n - 1].end();

        match (joins_prev, joins_next) {
            (true, true) => {
                let absorbed = self.runs.remove(n);
                self.runs[n - 1].count += absorbed.count + 1;
                n -= 1;
                trace!(value = x, run = n, "bridged two runs");
            }
            (false, true) => {
                let run = &mut self.runs[n];
                run.value -= 1;
                run.count += 1;
                trace!(value = x, run = n, "extended run downward");
            }
            (true, false) => {
                self.runs[n - 1].count += 1;
                n -= 1;
                trace!(value = x, run = n, "extended run upward");
            }
            (false, false) => {
                let index = next.index;
                self.runs.insert(n, Run::new(x, index, 1));
                trace!(value = x, run = n, "inserted singleton run");
            }
        }

        let shifted = &mut self.runs[n + 1..];
        for run in shifted.iter_mut() {
            run.index += 1;
        }
        trace!(shifted = shifted.len(), "shifted cumulative indexes");
        true
    }
}

impl Extend<u32> for RunIndex {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}

impl FromIterator<u32> for RunIndex {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

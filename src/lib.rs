//! # Semi-Dense Run Indexes
//!
//! *Rank queries over long runs of integers, in space proportional to the gaps.*
//!
//! ## Intuition First
//!
//! Picture a satellite that reports a sample every second, but only while it is
//! overhead. You get a few hours of unbroken data, then a long silence, then
//! another pass that starts a little later than yesterday's. Asking "how many
//! samples did we record before time T" over a plain sorted list means storing
//! every timestamp. Almost all of them are boring: each one is the previous
//! one plus one.
//!
//! A run index keeps only the interesting parts: where each unbroken stretch
//! starts, how long it is, and how many samples came before it.
//!
//! ## The Problem
//!
//! - **Sorted vector**: $O(\log n)$ rank, but $O(n)$ space in the number of values.
//! - **Bit vector over the universe**: $O(1)$ rank, but space proportional to the
//!   value range, which is $2^{32}$ bits for `u32` keys.
//!
//! When values arrive in runs, both are wasteful. Space should follow the
//! number of gaps instead.
//!
//! ## Mathematical Formulation
//!
//! A set $S \subseteq [0, 2^{32})$ is written as disjoint, non-touching runs
//! $[v_i, v_i + c_i)$ with $v_i + c_i < v_{i+1}$. Each run also stores the prefix
//! sum $p_i = \sum_{j<i} c_j$. Then
//!
//! $$\text{rank}(x) = |\{ s \in S : s < x \}| = p_i + \max(0, x - v_i)$$
//!
//! where $i$ is the first run with $x < v_i + c_i$.
//!
//! ## Complexity Analysis
//!
//! With $r$ runs:
//! - **Space**: $O(r)$.
//! - **rank / select / membership**: $O(\log r)$.
//! - **append at the tail**: $O(1)$ amortized.
//! - **insert before the tail**: $O(r)$, since every later prefix sum moves.
//!
//! ## What Could Go Wrong
//!
//! 1. **Out-of-order data**: every insert before the last run shifts the rest of
//!    the table. Data that mostly arrives in order is the intended workload.
//! 2. **Many tiny gaps**: if almost every value is isolated, $r \approx n$ and a
//!    plain sorted vector or a bitmap is cheaper.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`RunIndex`**: the run table with `push`, `index_of`, `lower_bound`,
//!   `select`, and `min`/`max`/`len`.
//! - **`Run`**: one entry of the table.
//! - **`lower_bound`**: the monotone-predicate binary search the index is built on.
//!
//! `RunIndex` has no internal locking. Shared mutation needs an external lock,
//! e.g. `RwLock<RunIndex>`.
//!
//! ## References
//!
//! - Golomb, S. (1966). "Run-length encodings."
//! - Lemire, D., et al. (2016). "Consistently faster and smaller compressed
//!   bitmaps with Roaring." (run containers)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod run;
pub mod run_index;
pub mod search;

pub use error::{Error, Result};
pub use run::Run;
pub use run_index::RunIndex;
pub use search::lower_bound;

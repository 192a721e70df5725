//! Error types for run-length indexes.

use thiserror::Error;

/// Error variants for [`RunIndex`](crate::RunIndex) queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The index holds no values, so it has no minimum or maximum.
    #[error("empty collection: no values have been recorded")]
    Empty,

    /// A selection was requested for a rank past the last recorded value.
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(u64),
}

/// A specialized Result type for run-index operations.
pub type Result<T> = std::result::Result<T, Error>;

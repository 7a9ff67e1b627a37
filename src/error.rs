//! Error types for the checked failure modes of [`crate::vector::Vector`].
//!
//! [`crate::dict::Dictionary`] never fails: missing keys surface as `None`.

use thiserror::Error;

/// Failure modes for `Vector` indexed operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `get`/`update` was called with an index outside `[0, length)`.
    #[error("index {index} out of bounds for vector of length {length}")]
    OutOfBounds {
        /// The index that was requested.
        index: i64,
        /// The length of the vector at the time of the call.
        length: usize,
    },
    /// `remove_last` was called on a zero-length vector.
    #[error("removeLast called on an empty vector")]
    Empty,
}

/// Convenience alias for fallible `Vector` operations.
pub type Result<T> = std::result::Result<T, Error>;

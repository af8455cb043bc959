//! Error types for bit vector operations.

use thiserror::Error;

/// Error variants for bit vector operations.
///
/// A call that returns an error never mutates the vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An index was provided that is outside `[0, len)`.
    #[error("index out of range: {index} (len {len})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the vector at the time of the call.
        len: usize,
    },

    /// A range query was given a start past its end.
    #[error("invalid range: start {start} > end {end}")]
    InvalidRange {
        /// Inclusive start of the range.
        start: usize,
        /// Inclusive end of the range.
        end: usize,
    },

    /// A rank argument was below its minimum of 1.
    #[error("invalid argument: rank {0} must be at least 1")]
    InvalidArgument(usize),

    /// A search found no qualifying position.
    #[error("no matching bit found")]
    NotFound,
}

/// A specialized Result type for bit vector operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = Error::IndexOutOfRange { index: 10, len: 10 };
        assert_eq!(e.to_string(), "index out of range: 10 (len 10)");

        let e = Error::InvalidRange { start: 5, end: 2 };
        assert_eq!(e.to_string(), "invalid range: start 5 > end 2");

        assert_eq!(
            Error::InvalidArgument(0).to_string(),
            "invalid argument: rank 0 must be at least 1"
        );
        assert_eq!(Error::NotFound.to_string(), "no matching bit found");
    }
}

//! Error types for route construction and search.

use thiserror::Error;

/// Result type alias for u-delivery operations.
pub type Result<T> = std::result::Result<T, RouteError>;

/// Errors raised by sequence and route operations.
///
/// Rejected duplicate inserts are not errors; see
/// [`Insertion`](crate::models::Insertion).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// The operation needs at least one coordinate.
    #[error("sequence is empty")]
    EmptySequence,

    /// A closest-member query coincided with an existing member.
    #[error("query coordinate coincides with member at index {index}")]
    CoincidentTarget {
        /// Index of the coinciding member.
        index: usize,
    },

    /// A position lies outside the sequence.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Offending index.
        index: usize,
        /// Sequence length at the time of the call.
        len: usize,
    },

    /// An inclusive range whose start lies after its end.
    #[error("invalid range [{start}, {end}]")]
    InvalidRange {
        /// Range start.
        start: usize,
        /// Range end.
        end: usize,
    },

    /// A route operation would touch a depot entry.
    #[error("index {index} is a depot position")]
    DepotPosition {
        /// Offending index.
        index: usize,
    },

    /// Coincidence tolerance must be finite and non-negative.
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(f64),
}

//! # Vector Error Types
//!
//! All errors the vector module can report.

use thiserror::Error;

/// Errors that can occur in vector operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// The component buffer could not be allocated.
    #[error("allocation of {requested} components failed")]
    Allocation {
        /// The number of components requested.
        requested: usize,
    },

    /// Two operands of unequal length were combined.
    #[error("vector lengths do not match: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// An operation was applied to a zero-length vector.
    #[error("operation on an empty vector")]
    Empty,

    /// Normalization of a vector whose magnitude is zero or not finite.
    #[error("cannot normalize a zero or non-finite vector")]
    Degenerate,
}

/// Result type for vector operations.
pub type VectorResult<T> = Result<T, VectorError>;

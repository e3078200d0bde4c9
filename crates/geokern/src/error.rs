//! Errors surfaced by the kernel.
//!
//! Degenerate geometry is not an error (see `geom`); these variants cover
//! caller mistakes that can be reported instead of asserted.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeomError {
    /// Index past the end of a point sequence.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("insufficient points for operation: expected at least {expected}, got {actual}")]
    TooFewPoints { expected: usize, actual: usize },

    /// Parallel coordinate arrays of different lengths.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

pub type GeomResult<T> = Result<T, GeomError>;

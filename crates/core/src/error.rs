//! Error types for ndmorph

use thiserror::Error;

/// Main error type for ndmorph operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("dimensionality mismatch: expected {expected} dims, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("{what} must be in C-contiguous (row-major) layout")]
    NotContiguous { what: &'static str },

    #[error("buffer length mismatch: shape requires {expected} elements, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    #[error("index {index:?} out of bounds for grid of shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("structuring element has no cells")]
    EmptyElement,

    #[error("invalid window size: {size}")]
    InvalidWindow { size: usize },

    #[error("failed to allocate {bytes} bytes of scratch space")]
    AllocationFailure { bytes: usize },

    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

/// Coarse error category, for callers that dispatch on failure class
/// rather than on the specific cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A shape, dimensionality, or contiguity precondition was violated.
    /// Reported before any write to an output.
    InvalidArgument,
    /// A scratch buffer could not be allocated. Reported before any write.
    AllocationFailure,
    /// An internal assertion failed. Outputs may be partially written.
    InternalInvariant,
}

impl Error {
    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ShapeMismatch { .. }
            | Error::DimensionMismatch { .. }
            | Error::NotContiguous { .. }
            | Error::BufferLength { .. }
            | Error::IndexOutOfBounds { .. }
            | Error::EmptyElement
            | Error::InvalidWindow { .. } => ErrorKind::InvalidArgument,
            Error::AllocationFailure { .. } => ErrorKind::AllocationFailure,
            Error::InternalInvariant(_) => ErrorKind::InternalInvariant,
        }
    }
}

/// Result type alias for ndmorph operations
pub type Result<T> = std::result::Result<T, Error>;

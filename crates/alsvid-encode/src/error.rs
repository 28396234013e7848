//! Error types for the encoding crate.

use thiserror::Error;

/// Errors produced while encoding a problem into a spin model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// An input matrix is not square.
    #[error("input matrix must be square, got {rows}x{cols}")]
    NonSquareMatrix {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Flow and distance matrices disagree on the problem size.
    #[error("flow matrix is {flow}x{flow} but distance matrix is {distance}x{distance}")]
    MatrixSizeMismatch {
        /// Side length of the flow matrix.
        flow: usize,
        /// Side length of the distance matrix.
        distance: usize,
    },

    /// Penalty weights must be non-negative.
    #[error("penalty weight must be non-negative, got {0}")]
    NegativePenalty(f64),

    /// Problem model construction failed.
    #[error("model error: {0}")]
    Model(#[from] alsvid_model::ModelError),
}

/// Result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

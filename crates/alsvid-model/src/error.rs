//! Error types for the model crate.

use thiserror::Error;

/// Errors produced when constructing a problem model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// A coefficient matrix is not square.
    #[error("coefficient matrix must be square, got {rows}x{cols}")]
    NonSquareMatrix {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Local fields and couplings disagree on the number of spins.
    #[error("field vector has length {fields} but coupling matrix is {couplings}x{couplings}")]
    DimensionMismatch {
        /// Length of the field vector h.
        fields: usize,
        /// Side length of the coupling matrix J.
        couplings: usize,
    },
}

/// Result type for model construction.
pub type ModelResult<T> = Result<T, ModelError>;

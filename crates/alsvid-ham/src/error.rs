//! Error types for the operator crate.

use thiserror::Error;

/// Errors produced by operator construction and diagonalization.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HamError {
    /// Refused to allocate an operator above the configured qubit ceiling.
    #[error("refusing to build a {requested}-qubit operator: ceiling is {ceiling} qubits")]
    QubitCeilingExceeded {
        /// Qubits the operator would need.
        requested: usize,
        /// Configured maximum.
        ceiling: usize,
    },

    /// A built operator failed the Hermiticity assertion.
    #[error("operator is not Hermitian: max |H - H\u{2020}| = {deviation:.3e}")]
    NotHermitian {
        /// Largest element-wise deviation from the conjugate transpose.
        deviation: f64,
    },

    /// A matrix dimension is not a power of two.
    #[error("operator dimension {dim} is not a power of two")]
    NotPowerOfTwo {
        /// The offending dimension.
        dim: usize,
    },

    /// A state vector does not match the operator dimension.
    #[error("state has dimension {got} but operator expects {expected}")]
    DimensionMismatch {
        /// Dimension the operator expects.
        expected: usize,
        /// Dimension supplied.
        got: usize,
    },

    /// An expectation value carried a non-negligible imaginary part.
    #[error("expectation value has imaginary residue {residue:.3e}")]
    ComplexResidue {
        /// Magnitude of the imaginary part.
        residue: f64,
    },

    /// The Jacobi eigensolver did not reach the target off-diagonal norm.
    #[error("eigensolver did not converge within {sweeps} sweeps")]
    EigenNotConverged {
        /// Number of sweeps attempted.
        sweeps: usize,
    },
}

/// Result type for operator construction and diagonalization.
pub type HamResult<T> = Result<T, HamError>;

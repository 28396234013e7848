//! Error types for the simulation crate.

use thiserror::Error;

/// Errors produced by the variational simulator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Problem and mixing operators act on different registers.
    #[error("problem operator has {problem} qubits but mixing operator has {mixing}")]
    OperatorMismatch {
        /// Qubits of the problem operator.
        problem: usize,
        /// Qubits of the mixing operator.
        mixing: usize,
    },

    /// The layer depth must be at least 1.
    #[error("layer depth must be at least 1")]
    ZeroLayers,

    /// The shot count must be at least 1.
    #[error("shot count must be at least 1")]
    ZeroShots,

    /// A flat parameter vector has the wrong length for the depth.
    #[error("expected {expected} parameters for depth {depth}, got {got}")]
    ParameterLength {
        /// Expected flat length (2·depth).
        expected: usize,
        /// Layer depth.
        depth: usize,
        /// Supplied length.
        got: usize,
    },

    /// Gamma and beta vectors disagree in length.
    #[error("gamma vector has length {gammas} but beta vector has length {betas}")]
    UnevenSchedules {
        /// Length of the gamma vector.
        gammas: usize,
        /// Length of the beta vector.
        betas: usize,
    },

    /// The evolved state drifted off unit norm.
    #[error("state norm drifted to {norm} after evolution")]
    NormDrift {
        /// The measured norm.
        norm: f64,
    },

    /// Operator construction or diagonalization failed.
    #[error("operator error: {0}")]
    Ham(#[from] alsvid_ham::HamError),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

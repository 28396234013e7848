//! `alsvid-ham` — dense Hermitian operators from spin models.
//!
//! Builds the 2ⁿ×2ⁿ operator of an Ising problem,
//!
//!   H = Σᵢ hᵢ·Zᵢ + Σ_{i<j} J_ij·Zᵢ·Zⱼ
//!
//! and the companion mixing operator `Σᵢ Xᵢ`, via iterated tensor products
//! of the four 2×2 primitives (I, X, Y, Z). Every returned operator is
//! checked for Hermiticity at build time; the qubit-count ceiling is
//! enforced *before* any 2ⁿ×2ⁿ allocation.
//!
//! The qubit-ordering convention — qubit 0 occupies the leftmost tensor
//! factor, so its bit is the most significant bit of a basis index — lives
//! in [`basis`] and is shared by every component that indexes basis states.
//!
//! # Example
//!
//! ```rust
//! use alsvid_ham::{BuilderConfig, OperatorBuilder};
//! use alsvid_model::IsingProblem;
//! use ndarray::array;
//!
//! let ising = IsingProblem::new(
//!     array![0.0, 0.0],
//!     array![[0.0, 0.5], [0.5, 0.0]],
//!     0.0,
//! ).unwrap();
//! let builder = OperatorBuilder::new(BuilderConfig::default());
//! let h = builder.problem_operator(&ising).unwrap();
//! let (energy, _state) = h.ground_state().unwrap();
//! assert!((energy - (-0.5)).abs() < 1e-10);
//! ```

pub mod basis;
pub mod builder;
pub mod eigen;
pub mod error;
pub mod pauli;

pub use builder::{BuilderConfig, Operator, OperatorBuilder};
pub use eigen::EigenDecomposition;
pub use error::{HamError, HamResult};
pub use pauli::{Pauli, operator_on_qubit, pauli_string_operator};

/// Numerical tolerance for Hermiticity and residue checks.
pub const EPSILON: f64 = 1e-10;

//! `alsvid-model` — problem models for quantum-inspired optimization.
//!
//! Two immutable value types describe one optimization attempt:
//!
//! - [`QuboProblem`] — minimize `xᵀQx + offset` over binary `x ∈ {0,1}ⁿ`
//! - [`IsingProblem`] — minimize `Σᵢ hᵢsᵢ + Σ_{i<j} J_ij sᵢsⱼ + offset`
//!   over spins `s ∈ {−1,+1}ⁿ`
//!
//! Both are constructed once per attempt and never mutated afterwards.
//! The binary↔spin correspondence used throughout the workspace is
//! `x = (1 − s) / 2`, so a measured bit equals its binary variable
//! (see [`spin`]).
//!
//! # Example
//!
//! ```rust
//! use alsvid_model::QuboProblem;
//! use ndarray::array;
//!
//! let qubo = QuboProblem::new(array![[1.0, -2.0], [-2.0, 1.0]], 0.0).unwrap();
//! assert_eq!(qubo.size(), 2);
//! assert_eq!(qubo.energy(&[true, true]), -2.0);
//! ```

pub mod error;
pub mod ising;
pub mod kind;
pub mod qubo;
pub mod spin;

pub use error::{ModelError, ModelResult};
pub use ising::IsingProblem;
pub use kind::ProblemKind;
pub use qubo::QuboProblem;
pub use spin::{binary_to_spin, spin_to_binary};

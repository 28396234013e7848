//! `alsvid-sim` — classical simulation of a QAOA-style variational search.
//!
//! Given an immutable problem operator and mixing operator (built by
//! `alsvid-ham`), the simulator
//!
//! 1. starts from the uniform superposition `ψ₀ = 2^{−n/2}·𝟙`,
//! 2. applies `p` alternating layers
//!    `ψ ← exp(−iγ·H_problem)·ψ`, `ψ ← exp(−iβ·H_mixing)·ψ`
//!    exactly, through eigendecompositions computed once per operator,
//! 3. minimizes the expectation objective `Re(ψ†·H_problem·ψ)` over the 2p
//!    parameters with a derivative-free strategy chosen at construction,
//! 4. samples a measurement distribution from the optimized state.
//!
//! Runs are deterministic for a fixed seed; budget exhaustion is reported
//! as `converged = false` on the result, never as an error.
//!
//! # Example
//!
//! ```rust,no_run
//! use alsvid_ham::{BuilderConfig, OperatorBuilder};
//! use alsvid_model::IsingProblem;
//! use alsvid_sim::{SimulatorConfig, VariationalSimulator};
//! use ndarray::array;
//!
//! let ising = IsingProblem::new(
//!     array![0.0, 0.0],
//!     array![[0.0, 0.5], [0.5, 0.0]],
//!     0.0,
//! ).unwrap();
//! let builder = OperatorBuilder::new(BuilderConfig::default());
//! let problem = builder.problem_operator(&ising).unwrap();
//! let mixing = builder.mixing_operator(2).unwrap();
//!
//! let sim = VariationalSimulator::new(
//!     problem,
//!     mixing,
//!     SimulatorConfig::default().with_seed(7),
//! ).unwrap();
//! let outcome = sim.run().unwrap();
//! println!("cost {} after {} iterations", outcome.cost, outcome.iterations);
//! ```

pub mod distribution;
pub mod error;
pub mod optimizer;
pub mod params;
pub mod simulator;
pub mod state;

pub use distribution::MeasurementDistribution;
pub use error::{SimError, SimResult};
pub use optimizer::{
    NelderMead, OptimizationResult, Optimizer, OptimizerKind, RandomPerturbation,
};
pub use params::Parameters;
pub use simulator::{SimulationOutcome, SimulatorConfig, VariationalSimulator};
pub use state::StateVector;

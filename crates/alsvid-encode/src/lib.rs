//! `alsvid-encode` — re-expressing binary quadratic problems as spin models.
//!
//! Two paths produce an [`alsvid_model::IsingProblem`]:
//!
//! - the algebraic transform [`qubo_to_ising`] (with exact inverse
//!   [`ising_to_qubo`] on the symmetrized image), and
//! - direct encoders for specific problem families:
//!   [`encode_assignment`] (one-hot assignment with quadratic penalties),
//!   [`encode_cycle`] (tour ordering with quadratic penalties) and
//!   [`encode_cut`] (graph partition, no QUBO detour).
//!
//! All encoders are deterministic; none of them draws randomness.
//!
//! # Example
//!
//! ```rust
//! use alsvid_encode::encode_cut;
//! use ndarray::array;
//!
//! // Unit-weight triangle: any 2/1 split cuts two edges.
//! let ising = encode_cut(&array![
//!     [0.0, 1.0, 1.0],
//!     [1.0, 0.0, 1.0],
//!     [1.0, 1.0, 0.0],
//! ]).unwrap();
//! assert_eq!(ising.energy(&[1, 1, -1]), -2.0); // energy = -cut
//! ```

pub mod cut;
pub mod error;
pub mod penalty;
pub mod transform;

pub use cut::encode_cut;
pub use error::{EncodeError, EncodeResult};
pub use penalty::{encode_assignment, encode_cycle};
pub use transform::{ising_to_qubo, qubo_to_ising};

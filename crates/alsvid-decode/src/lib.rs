//! `alsvid-decode` — from measurement outcomes to candidate solutions.
//!
//! Turns the raw bitstrings of a [`alsvid_sim::MeasurementDistribution`]
//! into problem-specific candidates, validates them, deterministically
//! repairs invalid ones, ranks outcomes, and reports distribution
//! diagnostics. Infeasibility is data, never an error: nothing in this
//! crate panics on a malformed candidate, and [`best_feasible`] always
//! returns *something* for a non-empty distribution.
//!
//! # Example
//!
//! ```rust
//! use alsvid_decode::{decode, repair, validate};
//! use alsvid_model::ProblemKind;
//!
//! // 3×3 one-hot layout with a duplicated slot: items 0 and 2 collide.
//! let bits = [
//!     true, false, false,
//!     false, true, false,
//!     true, false, false,
//! ];
//! let raw = decode(&bits, ProblemKind::Assignment);
//! assert!(!validate(&raw, ProblemKind::Assignment));
//! let (fixed, repaired) = repair(raw, ProblemKind::Assignment);
//! assert!(repaired && validate(&fixed, ProblemKind::Assignment));
//! ```

pub mod candidate;
pub mod diagnostics;
pub mod rank;

pub use candidate::{Candidate, decode, repair, validate};
pub use diagnostics::{DistributionDiagnostics, diagnostics};
pub use rank::{DecodedSolution, RankedOutcome, best_feasible, rank};

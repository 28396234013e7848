//! Spin-model (Ising) problems.
//!
//! An Ising instance is a field vector `h`, a coupling matrix `J` and a
//! scalar offset; the objective is to minimize
//!
//!   E(s) = Σᵢ hᵢ·sᵢ + Σ_{i<j} J_ij·sᵢ·sⱼ + offset
//!
//! over spin vectors `s ∈ {−1,+1}ⁿ`. `J` is symmetric with zero diagonal;
//! any input violating this is symmetrized and its diagonal zeroed at
//! construction, never assumed from the caller.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// An immutable Ising problem instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsingProblem {
    /// Local fields h (length n).
    h: Array1<f64>,
    /// Couplings J (n×n, symmetric, zero diagonal — enforced).
    j: Array2<f64>,
    /// Constant energy offset.
    offset: f64,
    /// Opaque caller-supplied metadata.
    metadata: serde_json::Value,
}

impl IsingProblem {
    /// Construct an Ising problem from fields and couplings.
    ///
    /// `j` is symmetrized and its diagonal zeroed before use. Fails if `j`
    /// is not square or its side length differs from `h.len()`.
    pub fn new(h: Array1<f64>, j: Array2<f64>, offset: f64) -> ModelResult<Self> {
        let (rows, cols) = j.dim();
        if rows != cols {
            return Err(ModelError::NonSquareMatrix { rows, cols });
        }
        if h.len() != rows {
            return Err(ModelError::DimensionMismatch {
                fields: h.len(),
                couplings: rows,
            });
        }
        let mut j = (&j + &j.t()) / 2.0;
        for i in 0..rows {
            j[[i, i]] = 0.0;
        }
        Ok(Self {
            h,
            j,
            offset,
            metadata: serde_json::Value::Null,
        })
    }

    /// Attach opaque metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }

    /// Number of spins.
    pub fn num_spins(&self) -> usize {
        self.h.len()
    }

    /// The local field vector h.
    pub fn fields(&self) -> &Array1<f64> {
        &self.h
    }

    /// The coupling matrix J (symmetric, zero diagonal).
    pub fn couplings(&self) -> &Array2<f64> {
        &self.j
    }

    /// The constant energy offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The opaque metadata value.
    pub fn metadata(&self) -> &serde_json::Value {
        &self.metadata
    }

    /// Evaluate `Σ h_i s_i + Σ_{i<j} J_ij s_i s_j + offset` for a spin
    /// vector with entries ±1.
    ///
    /// # Panics
    /// Panics if `s.len()` differs from the number of spins.
    pub fn energy(&self, s: &[i8]) -> f64 {
        let n = self.num_spins();
        assert_eq!(s.len(), n, "spin vector length mismatch");
        let mut total = self.offset;
        for i in 0..n {
            total += self.h[i] * f64::from(s[i]);
            for j in (i + 1)..n {
                total += self.j[[i, j]] * f64::from(s[i]) * f64::from(s[j]);
            }
        }
        total
    }

    /// Evaluate the energy of a binary assignment via `s = 1 − 2x`.
    pub fn energy_of_bits(&self, x: &[bool]) -> f64 {
        let s = crate::spin::binary_to_spin(x);
        self.energy(&s)
    }
}

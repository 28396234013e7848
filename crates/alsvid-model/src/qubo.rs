//! Quadratic unconstrained binary optimization (QUBO) problems.
//!
//! A QUBO instance is a square real matrix `Q` plus a scalar offset; the
//! objective is to minimize `xᵀQx + offset` over binary vectors `x`.
//! No symmetry is required of `Q` on input — every transform that can only
//! observe `Q_ij + Q_ji` works on the symmetrized matrix instead.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// An immutable QUBO problem instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuboProblem {
    /// Coefficient matrix Q (n×n, not necessarily symmetric).
    q: Array2<f64>,
    /// Constant energy offset.
    offset: f64,
    /// Opaque caller-supplied metadata, carried through encodings untouched.
    metadata: serde_json::Value,
}

impl QuboProblem {
    /// Construct a QUBO problem from a square coefficient matrix.
    ///
    /// Fails if the matrix is not square.
    pub fn new(q: Array2<f64>, offset: f64) -> ModelResult<Self> {
        let (rows, cols) = q.dim();
        if rows != cols {
            return Err(ModelError::NonSquareMatrix { rows, cols });
        }
        Ok(Self {
            q,
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

    /// Number of binary variables.
    pub fn size(&self) -> usize {
        self.q.nrows()
    }

    /// The coefficient matrix Q.
    pub fn matrix(&self) -> &Array2<f64> {
        &self.q
    }

    /// The constant energy offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The opaque metadata value.
    pub fn metadata(&self) -> &serde_json::Value {
        &self.metadata
    }

    /// The symmetric part `(Q + Qᵀ) / 2`.
    pub fn symmetrized(&self) -> Array2<f64> {
        (&self.q + &self.q.t()) / 2.0
    }

    /// True if `Q` equals its transpose within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        let n = self.size();
        for i in 0..n {
            for j in (i + 1)..n {
                if (self.q[[i, j]] - self.q[[j, i]]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Evaluate the objective `xᵀQx + offset` for a binary assignment.
    ///
    /// # Panics
    /// Panics if `x.len()` differs from the problem size.
    pub fn energy(&self, x: &[bool]) -> f64 {
        assert_eq!(x.len(), self.size(), "assignment length mismatch");
        let mut total = self.offset;
        for (i, &xi) in x.iter().enumerate() {
            if !xi {
                continue;
            }
            for (j, &xj) in x.iter().enumerate() {
                if xj {
                    total += self.q[[i, j]];
                }
            }
        }
        total
    }
}

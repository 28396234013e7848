//! Algebraic QUBO↔Ising transform.
//!
//! With the variable change `x = (1 − s) / 2` the binary objective
//! `xᵀQx + c` becomes a spin objective over `S = (Q + Qᵀ)/2`:
//!
//!   h_i   = −0.5·S_ii − 0.5·Σ_{j≠i} S_ij
//!   J_ij  = 0.25·(Q_ij + Q_ji)                    (i ≠ j)
//!   c'    = c + 0.5·Σ_i S_ii + 0.25·Σ_{i≠j} S_ij
//!
//! and the energies agree exactly: `ising.energy(1 − 2x) == qubo.energy(x)`.
//!
//! The forward map only ever observes `Q_ij + Q_ji`, so the inverse can
//! only reconstruct the symmetric part: round-tripping a symmetric `Q` is
//! exact (offset included), while an asymmetric `Q` comes back as
//! `(Q + Qᵀ)/2`.

use ndarray::{Array1, Array2};
use tracing::debug;

use alsvid_model::{IsingProblem, QuboProblem};

use crate::error::EncodeResult;

/// Re-express a QUBO problem as an Ising problem.
///
/// Deterministic; metadata is carried through untouched.
pub fn qubo_to_ising(qubo: &QuboProblem) -> EncodeResult<IsingProblem> {
    let n = qubo.size();
    let s = qubo.symmetrized();

    let mut h = Array1::<f64>::zeros(n);
    let mut j = Array2::<f64>::zeros((n, n));
    let mut offset = qubo.offset();

    for i in 0..n {
        h[i] = -0.5 * s[[i, i]];
        offset += 0.5 * s[[i, i]];
        for k in 0..n {
            if k != i {
                h[i] -= 0.5 * s[[i, k]];
            }
        }
    }
    for i in 0..n {
        for k in (i + 1)..n {
            let coupling = 0.5 * s[[i, k]];
            j[[i, k]] = coupling;
            j[[k, i]] = coupling;
            offset += coupling;
        }
    }

    debug!(num_spins = n, offset, "converted QUBO to Ising");
    Ok(IsingProblem::new(h, j, offset)?.with_metadata(qubo.metadata().clone()))
}

/// Re-express an Ising problem as a (symmetric) QUBO problem.
///
/// Exact algebraic inverse of [`qubo_to_ising`] on its image: the
/// reconstructed matrix is always symmetric.
pub fn ising_to_qubo(ising: &IsingProblem) -> EncodeResult<QuboProblem> {
    let n = ising.num_spins();
    let h = ising.fields();
    let j = ising.couplings();

    let mut q = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        let mut row_coupling = 0.0;
        for k in 0..n {
            if k != i {
                q[[i, k]] = 2.0 * j[[i, k]];
                row_coupling += j[[i, k]];
            }
        }
        q[[i, i]] = -2.0 * h[i] - 2.0 * row_coupling;
    }

    let mut offset = ising.offset();
    for i in 0..n {
        offset -= 0.5 * q[[i, i]];
        for k in 0..n {
            if k != i {
                offset -= 0.25 * q[[i, k]];
            }
        }
    }

    debug!(size = n, offset, "converted Ising to QUBO");
    Ok(QuboProblem::new(q, offset)?.with_metadata(ising.metadata().clone()))
}

//! Hermitian eigendecomposition via the cyclic Jacobi method.
//!
//! For a Hermitian `H` the decomposition `H = U·Λ·U†` (real Λ, unitary U)
//! makes the operator exponential exact:
//!
//!   exp(−iθH) = U·exp(−iθΛ)·U†
//!
//! which is unitary to floating precision for *any* θ — the property the
//! variational layer evolution relies on. Each Jacobi step applies a
//! two-sided complex rotation that zeroes one off-diagonal pair; sweeps
//! repeat until the off-diagonal Frobenius norm is negligible.

use ndarray::{Array1, Array2};
use num_complex::Complex64;
use tracing::debug;

use crate::error::{HamError, HamResult};

/// Maximum number of Jacobi sweeps before giving up.
const MAX_SWEEPS: usize = 64;

/// An eigendecomposition of a Hermitian operator.
///
/// Eigenvalues are ascending; column k of the eigenvector matrix belongs
/// to eigenvalue k.
#[derive(Debug, Clone)]
pub struct EigenDecomposition {
    eigenvalues: Array1<f64>,
    eigenvectors: Array2<Complex64>,
}

impl EigenDecomposition {
    /// Decompose a Hermitian matrix.
    ///
    /// The caller is responsible for Hermiticity (the builder asserts it);
    /// non-convergence surfaces as [`HamError::EigenNotConverged`].
    pub(crate) fn of_hermitian(matrix: &Array2<Complex64>) -> HamResult<Self> {
        let (eigenvalues, eigenvectors) = jacobi_hermitian(matrix)?;
        Ok(Self {
            eigenvalues,
            eigenvectors,
        })
    }

    /// Eigenvalues, ascending.
    pub fn eigenvalues(&self) -> &Array1<f64> {
        &self.eigenvalues
    }

    /// Eigenvector matrix U; column k matches eigenvalue k.
    pub fn eigenvectors(&self) -> &Array2<Complex64> {
        &self.eigenvectors
    }

    /// Dimension of the decomposed operator.
    pub fn dim(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Smallest eigenvalue and its eigenvector.
    pub fn ground_state(&self) -> (f64, Array1<Complex64>) {
        (self.eigenvalues[0], self.eigenvectors.column(0).to_owned())
    }

    /// Apply `exp(−i·angle·H)` to `state` in place.
    ///
    /// `scratch` must have the operator dimension; it is overwritten. No
    /// allocation happens here, so layers can reuse one scratch buffer.
    ///
    /// # Panics
    /// Panics if `state` or `scratch` have the wrong dimension.
    pub fn evolve(
        &self,
        angle: f64,
        state: &mut Array1<Complex64>,
        scratch: &mut Array1<Complex64>,
    ) {
        let n = self.dim();
        assert_eq!(state.len(), n, "state dimension mismatch");
        assert_eq!(scratch.len(), n, "scratch dimension mismatch");
        let u = &self.eigenvectors;

        // scratch ← U† ψ, rotated into the eigenbasis.
        for k in 0..n {
            let mut acc = Complex64::new(0.0, 0.0);
            for j in 0..n {
                acc += u[[j, k]].conj() * state[j];
            }
            scratch[k] = acc * Complex64::from_polar(1.0, -angle * self.eigenvalues[k]);
        }
        // ψ ← U scratch, rotated back.
        for j in 0..n {
            let mut acc = Complex64::new(0.0, 0.0);
            for k in 0..n {
                acc += u[[j, k]] * scratch[k];
            }
            state[j] = acc;
        }
    }
}

/// Cyclic Jacobi diagonalization of a Hermitian matrix.
///
/// Returns `(eigenvalues ascending, eigenvector columns)`.
fn jacobi_hermitian(matrix: &Array2<Complex64>) -> HamResult<(Array1<f64>, Array2<Complex64>)> {
    let n = matrix.nrows();
    let mut a = matrix.clone();
    let mut v = Array2::<Complex64>::eye(n);

    // Absolute convergence target, scaled to matrix magnitude and size so
    // the rounding floor of large matrices stays reachable.
    let scale: f64 = matrix.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
    let target = n as f64 * 1e-14 * scale.max(1.0);

    for sweep in 0..MAX_SWEEPS {
        let off = off_diagonal_norm(&a);
        if off <= target {
            debug!(dim = n, sweep, off, "jacobi converged");
            let (eigenvalues, eigenvectors) = sort_ascending(&a, v);
            return Ok((eigenvalues, eigenvectors));
        }
        for p in 0..n {
            for q in (p + 1)..n {
                rotate(&mut a, &mut v, p, q);
            }
        }
    }
    Err(HamError::EigenNotConverged { sweeps: MAX_SWEEPS })
}

/// Frobenius norm of the strictly upper triangle.
fn off_diagonal_norm(a: &Array2<Complex64>) -> f64 {
    let n = a.nrows();
    let mut sum = 0.0;
    for p in 0..n {
        for q in (p + 1)..n {
            sum += a[[p, q]].norm_sqr();
        }
    }
    sum.sqrt()
}

/// One two-sided rotation zeroing the (p, q) element of a Hermitian matrix.
///
/// With `a_pq = β·e^{iφ}` the rotation
///
///   R[p,p] = c,  R[p,q] = −s·e^{iφ},  R[q,p] = s·e^{−iφ},  R[q,q] = c
///
/// where `tan 2θ = 2β / (a_pp − a_qq)` makes `(R†AR)_pq = 0`; V
/// accumulates `V·R` so its columns end up as eigenvectors.
fn rotate(a: &mut Array2<Complex64>, v: &mut Array2<Complex64>, p: usize, q: usize) {
    let n = a.nrows();
    let apq = a[[p, q]];
    let beta = apq.norm();
    if beta == 0.0 {
        return;
    }
    let phase = apq / beta;
    let theta = 0.5 * (2.0 * beta).atan2(a[[p, p]].re - a[[q, q]].re);
    let c = theta.cos();
    let s = theta.sin();

    let col_p = Complex64::new(c, 0.0);
    let s_phase = phase * s;

    // B = A·R: mix columns p and q of every row.
    for k in 0..n {
        let akp = a[[k, p]];
        let akq = a[[k, q]];
        a[[k, p]] = akp * col_p + akq * s_phase.conj();
        a[[k, q]] = akq * col_p - akp * s_phase;
    }
    // A' = R†·B: mix rows p and q of every column.
    for k in 0..n {
        let apk = a[[p, k]];
        let aqk = a[[q, k]];
        a[[p, k]] = apk * col_p + aqk * s_phase;
        a[[q, k]] = aqk * col_p - apk * s_phase.conj();
    }
    // Clean the rounding residue on the zeroed pair and keep the diagonal real.
    a[[p, q]] = Complex64::new(0.0, 0.0);
    a[[q, p]] = Complex64::new(0.0, 0.0);
    a[[p, p]] = Complex64::new(a[[p, p]].re, 0.0);
    a[[q, q]] = Complex64::new(a[[q, q]].re, 0.0);

    // V ← V·R.
    for k in 0..n {
        let vkp = v[[k, p]];
        let vkq = v[[k, q]];
        v[[k, p]] = vkp * col_p + vkq * s_phase.conj();
        v[[k, q]] = vkq * col_p - vkp * s_phase;
    }
}

/// Sort eigenpairs by ascending eigenvalue.
fn sort_ascending(
    a: &Array2<Complex64>,
    v: Array2<Complex64>,
) -> (Array1<f64>, Array2<Complex64>) {
    let n = a.nrows();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| a[[i, i]].re.total_cmp(&a[[j, j]].re));

    let eigenvalues = Array1::from_iter(order.iter().map(|&k| a[[k, k]].re));
    let mut eigenvectors = Array2::<Complex64>::zeros((n, n));
    for (dst, &src) in order.iter().enumerate() {
        for row in 0..n {
            eigenvectors[[row, dst]] = v[[row, src]];
        }
    }
    (eigenvalues, eigenvectors)
}

//! Direct cut encoding — no QUBO intermediate.
//!
//! For an edge-weighted graph given as an adjacency matrix, the spin model
//!
//!   h = 0,   J_ij = w_ij / 2,   offset = −W/2   (W = total edge weight)
//!
//! satisfies `E(s) = −cut(s)` identically: an edge {i,j} is cut exactly
//! when `s_i·s_j = −1`, so minimizing the energy maximizes the cut and the
//! ground-state energy reports the maximum cut weight directly.

use ndarray::{Array1, Array2};
use tracing::debug;

use alsvid_model::IsingProblem;

use crate::error::{EncodeError, EncodeResult};

/// Encode a maximum-cut instance from an adjacency matrix.
///
/// The matrix is read as undirected: the weight of edge {i,j} is
/// `(a_ij + a_ji) / 2`; the diagonal (self-loops) is ignored.
pub fn encode_cut(adjacency: &Array2<f64>) -> EncodeResult<IsingProblem> {
    let (rows, cols) = adjacency.dim();
    if rows != cols {
        return Err(EncodeError::NonSquareMatrix { rows, cols });
    }
    let n = rows;

    let mut j = Array2::<f64>::zeros((n, n));
    let mut total_weight = 0.0;
    for a in 0..n {
        for b in (a + 1)..n {
            let w = 0.5 * (adjacency[[a, b]] + adjacency[[b, a]]);
            if w != 0.0 {
                j[[a, b]] = w / 2.0;
                j[[b, a]] = w / 2.0;
                total_weight += w;
            }
        }
    }

    debug!(nodes = n, total_weight, "encoded cut problem");
    Ok(IsingProblem::new(
        Array1::zeros(n),
        j,
        -total_weight / 2.0,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    /// Unit-weight 4-cycle: 0-1-2-3-0.
    fn ring_4() -> Array2<f64> {
        array![
            [0.0, 1.0, 0.0, 1.0],
            [1.0, 0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 1.0],
            [1.0, 0.0, 1.0, 0.0],
        ]
    }

    #[test]
    fn energy_is_negative_cut() {
        let ising = encode_cut(&ring_4()).unwrap();
        // Alternating bipartition cuts all four edges.
        assert!((ising.energy(&[1, -1, 1, -1]) - (-4.0)).abs() < 1e-12);
        // One node alone cuts two edges.
        assert!((ising.energy(&[-1, 1, 1, 1]) - (-2.0)).abs() < 1e-12);
        // No cut at all.
        assert!((ising.energy(&[1, 1, 1, 1]) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn fields_are_zero() {
        let ising = encode_cut(&ring_4()).unwrap();
        assert!(ising.fields().iter().all(|&h| h == 0.0));
    }

    #[test]
    fn directed_weights_are_averaged() {
        let ising = encode_cut(&array![[0.0, 2.0], [0.0, 0.0]]).unwrap();
        // Edge weight (2 + 0)/2 = 1, coupling 0.5, offset -0.5.
        assert!((ising.couplings()[[0, 1]] - 0.5).abs() < 1e-12);
        assert!((ising.offset() - (-0.5)).abs() < 1e-12);
        assert!((ising.energy(&[1, -1]) - (-1.0)).abs() < 1e-12);
    }
}

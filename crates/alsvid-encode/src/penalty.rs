//! One-hot penalty encoders for assignment- and cycle-style problems.
//!
//! Both families place n items over n slots with x_{i·n+j} = "item i
//! occupies slot j" and enforce the permutation structure with quadratic
//! penalties: every row and every column of the n×n variable grid
//! contributes `P·(Σ x − 1)²`, which expands over binary variables to
//! `−P` on each diagonal entry, `+2P` on each intra-group pair and a
//! constant `+P`.

use ndarray::Array2;
use tracing::debug;

use alsvid_model::{IsingProblem, QuboProblem};

use crate::error::{EncodeError, EncodeResult};
use crate::transform::qubo_to_ising;

/// Encode an assignment problem (flows between items, distances between
/// slots) as an Ising model over n² one-hot variables.
///
/// The objective is `Σ_{i,j,k,l} flow[i,j]·distance[k,l]·x_ik·x_jl`; the
/// one-hot penalties make every minimum a permutation for sufficiently
/// large `penalty_weight`.
pub fn encode_assignment(
    flow: &Array2<f64>,
    distance: &Array2<f64>,
    penalty_weight: f64,
) -> EncodeResult<IsingProblem> {
    let n = check_pair(flow, distance, penalty_weight)?;
    let mut q = Array2::<f64>::zeros((n * n, n * n));

    // Objective: coupling between "item i in slot k" and "item j in slot l".
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                for l in 0..n {
                    q[[i * n + k, j * n + l]] += flow[[i, j]] * distance[[k, l]];
                }
            }
        }
    }

    let offset = add_one_hot_penalties(&mut q, n, penalty_weight);
    debug!(
        items = n,
        variables = n * n,
        penalty = penalty_weight,
        "encoded assignment problem"
    );
    qubo_to_ising(&QuboProblem::new(q, offset)?)
}

/// Encode a cycle (tour-ordering) problem as an Ising model over n²
/// one-hot variables: x_{i·n+p} = "stop i is visited at position p".
///
/// The objective charges `distance[i,j]` whenever stop j directly follows
/// stop i in the tour (positions wrap around).
pub fn encode_cycle(distance: &Array2<f64>, penalty_weight: f64) -> EncodeResult<IsingProblem> {
    let n = check_square(distance)?;
    if penalty_weight < 0.0 {
        return Err(EncodeError::NegativePenalty(penalty_weight));
    }
    let mut q = Array2::<f64>::zeros((n * n, n * n));

    // Objective: successive positions p → p+1 (mod n) pay the leg distance.
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            for p in 0..n {
                let next = (p + 1) % n;
                q[[i * n + p, j * n + next]] += distance[[i, j]];
            }
        }
    }

    let offset = add_one_hot_penalties(&mut q, n, penalty_weight);
    debug!(
        stops = n,
        variables = n * n,
        penalty = penalty_weight,
        "encoded cycle problem"
    );
    qubo_to_ising(&QuboProblem::new(q, offset)?)
}

/// Add the row and column one-hot penalties for an n×n variable grid,
/// returning the accumulated constant offset (`+P` per constraint).
fn add_one_hot_penalties(q: &mut Array2<f64>, n: usize, penalty: f64) -> f64 {
    // Rows: item i occupies exactly one slot.
    for i in 0..n {
        for k in 0..n {
            q[[i * n + k, i * n + k]] -= penalty;
            for l in (k + 1)..n {
                q[[i * n + k, i * n + l]] += 2.0 * penalty;
            }
        }
    }
    // Columns: slot k hosts exactly one item.
    for k in 0..n {
        for i in 0..n {
            q[[i * n + k, i * n + k]] -= penalty;
            for j in (i + 1)..n {
                q[[i * n + k, j * n + k]] += 2.0 * penalty;
            }
        }
    }
    2.0 * n as f64 * penalty
}

fn check_square(m: &Array2<f64>) -> EncodeResult<usize> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(EncodeError::NonSquareMatrix { rows, cols });
    }
    Ok(rows)
}

fn check_pair(flow: &Array2<f64>, distance: &Array2<f64>, penalty: f64) -> EncodeResult<usize> {
    let n = check_square(flow)?;
    let m = check_square(distance)?;
    if n != m {
        return Err(EncodeError::MatrixSizeMismatch { flow: n, distance: m });
    }
    if penalty < 0.0 {
        return Err(EncodeError::NegativePenalty(penalty));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    /// Bits for "item i occupies slot perm[i]".
    fn permutation_bits(perm: &[usize]) -> Vec<bool> {
        let n = perm.len();
        let mut bits = vec![false; n * n];
        for (i, &slot) in perm.iter().enumerate() {
            bits[i * n + slot] = true;
        }
        bits
    }

    #[test]
    fn rejects_negative_penalty() {
        let m = Array2::<f64>::zeros((2, 2));
        assert!(matches!(
            encode_assignment(&m, &m, -1.0),
            Err(EncodeError::NegativePenalty(_))
        ));
    }

    #[test]
    fn rejects_mismatched_sizes() {
        let flow = Array2::<f64>::zeros((2, 2));
        let distance = Array2::<f64>::zeros((3, 3));
        assert!(matches!(
            encode_assignment(&flow, &distance, 1.0),
            Err(EncodeError::MatrixSizeMismatch { flow: 2, distance: 3 })
        ));
    }

    #[test]
    fn permutations_beat_constraint_violations() {
        let flow = array![[0.0, 1.0], [1.0, 0.0]];
        let distance = array![[0.0, 2.0], [2.0, 0.0]];
        let ising = encode_assignment(&flow, &distance, 20.0).unwrap();

        let identity = ising.energy_of_bits(&permutation_bits(&[0, 1]));
        let swap = ising.energy_of_bits(&permutation_bits(&[1, 0]));
        // Both items on the same slot violates a column constraint.
        let clash = ising.energy_of_bits(&permutation_bits(&[0, 0]));
        // An empty grid violates every constraint.
        let empty = ising.energy_of_bits(&[false; 4]);

        assert!(identity < clash);
        assert!(swap < clash);
        assert!(identity < empty);
    }

    #[test]
    fn cycle_energy_tracks_tour_length() {
        // Three stops on a line: 0 -1- 1 -1- 2, long way round 0-2 costs 2.
        let distance = array![
            [0.0, 1.0, 2.0],
            [1.0, 0.0, 1.0],
            [2.0, 1.0, 0.0],
        ];
        let ising = encode_cycle(&distance, 30.0).unwrap();

        // Tour 0→1→2→0: length 1 + 1 + 2 = 4 (every 3-cycle has the same
        // undirected length here, so compare against an invalid layout).
        let tour = ising.energy_of_bits(&permutation_bits(&[0, 1, 2]));
        let clash = ising.energy_of_bits(&permutation_bits(&[0, 0, 0]));
        assert!(tour < clash);
    }
}

//! Dense operator construction from spin models.
//!
//! The builder turns an [`IsingProblem`] into its 2ⁿ×2ⁿ problem operator
//! and produces the companion mixing operator that drives the variational
//! search. Both pass a Hermiticity assertion before they are returned; the
//! qubit ceiling is checked before anything 2ⁿ-sized is allocated.

use ndarray::{Array1, Array2};
use num_complex::Complex64;
use tracing::debug;

use alsvid_model::IsingProblem;

use crate::EPSILON;
use crate::eigen::EigenDecomposition;
use crate::error::{HamError, HamResult};
use crate::pauli::{Pauli, operator_on_qubit, pauli_string_operator};

/// Configuration for operator construction.
///
/// Immutable once handed to a builder; there is no process-wide state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuilderConfig {
    /// Hard ceiling on the qubit count. Operators are dense 2ⁿ×2ⁿ complex
    /// matrices, so every extra qubit quadruples the allocation; requests
    /// above the ceiling fail fast instead of exhausting memory.
    pub max_qubits: usize,
    /// Tolerance for the build-time Hermiticity assertion.
    pub hermiticity_tol: f64,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            max_qubits: 12,
            hermiticity_tol: EPSILON,
        }
    }
}

impl BuilderConfig {
    /// Set the qubit ceiling.
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Set the Hermiticity tolerance.
    #[must_use]
    pub fn with_hermiticity_tol(mut self, tol: f64) -> Self {
        self.hermiticity_tol = tol;
        self
    }
}

/// Builds dense Hermitian operators from spin models.
pub struct OperatorBuilder {
    config: BuilderConfig,
}

impl OperatorBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// The builder configuration.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Build the problem operator `H = Σ hᵢ·Zᵢ + Σ_{i<j} J_ij·Zᵢ·Zⱼ`.
    ///
    /// Zero fields and couplings are skipped; the skip is pure sparsity and
    /// cannot change the resulting matrix. The constant offset of the spin
    /// model is *not* part of the operator — callers add it classically.
    pub fn problem_operator(&self, ising: &IsingProblem) -> HamResult<Operator> {
        let n = ising.num_spins();
        self.check_ceiling(n)?;

        let dim = 1usize << n;
        let mut matrix = Array2::<Complex64>::zeros((dim, dim));
        let h = ising.fields();
        let j = ising.couplings();

        let mut terms = 0usize;
        for i in 0..n {
            if h[i] != 0.0 {
                matrix.scaled_add(
                    Complex64::new(h[i], 0.0),
                    &operator_on_qubit(Pauli::Z, i, n),
                );
                terms += 1;
            }
        }
        for i in 0..n {
            for k in (i + 1)..n {
                if j[[i, k]] != 0.0 {
                    matrix.scaled_add(
                        Complex64::new(j[[i, k]], 0.0),
                        &pauli_string_operator(&[(i, Pauli::Z), (k, Pauli::Z)], n),
                    );
                    terms += 1;
                }
            }
        }

        debug!(num_qubits = n, dim, terms, "built problem operator");
        self.finish(matrix, n)
    }

    /// Build the default mixing operator `Σᵢ Xᵢ`.
    pub fn mixing_operator(&self, num_qubits: usize) -> HamResult<Operator> {
        self.mixing_operator_with(num_qubits, Pauli::X)
    }

    /// Build a mixing operator `Σᵢ Dᵢ` for an arbitrary single-qubit driver.
    pub fn mixing_operator_with(&self, num_qubits: usize, driver: Pauli) -> HamResult<Operator> {
        self.check_ceiling(num_qubits)?;

        let dim = 1usize << num_qubits;
        let mut matrix = Array2::<Complex64>::zeros((dim, dim));
        for i in 0..num_qubits {
            matrix = matrix + operator_on_qubit(driver, i, num_qubits);
        }

        debug!(num_qubits, dim, ?driver, "built mixing operator");
        self.finish(matrix, num_qubits)
    }

    fn check_ceiling(&self, requested: usize) -> HamResult<()> {
        if requested > self.config.max_qubits {
            return Err(HamError::QubitCeilingExceeded {
                requested,
                ceiling: self.config.max_qubits,
            });
        }
        Ok(())
    }

    fn finish(&self, matrix: Array2<Complex64>, num_qubits: usize) -> HamResult<Operator> {
        let deviation = hermiticity_deviation(&matrix);
        if deviation > self.config.hermiticity_tol {
            return Err(HamError::NotHermitian { deviation });
        }
        Ok(Operator { matrix, num_qubits })
    }
}

/// A dense Hermitian operator over a fixed qubit register.
#[derive(Debug, Clone)]
pub struct Operator {
    matrix: Array2<Complex64>,
    num_qubits: usize,
}

impl Operator {
    /// Wrap a caller-supplied matrix, checking shape and Hermiticity.
    pub fn from_matrix(matrix: Array2<Complex64>, tol: f64) -> HamResult<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(HamError::DimensionMismatch {
                expected: rows,
                got: cols,
            });
        }
        if !rows.is_power_of_two() {
            return Err(HamError::NotPowerOfTwo { dim: rows });
        }
        let deviation = hermiticity_deviation(&matrix);
        if deviation > tol {
            return Err(HamError::NotHermitian { deviation });
        }
        Ok(Self {
            num_qubits: rows.trailing_zeros() as usize,
            matrix,
        })
    }

    /// The operator matrix.
    pub fn matrix(&self) -> &Array2<Complex64> {
        &self.matrix
    }

    /// Number of qubits the operator acts on.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Matrix dimension (2ⁿ).
    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    /// Largest element-wise deviation from the conjugate transpose.
    pub fn hermiticity_deviation(&self) -> f64 {
        hermiticity_deviation(&self.matrix)
    }

    /// The real expectation value `Re(ψ†·H·ψ)`.
    ///
    /// For a Hermitian operator and unit state the imaginary part is pure
    /// rounding; it is asserted below [`EPSILON`] rather than silently
    /// dropped.
    pub fn expectation(&self, state: &Array1<Complex64>) -> HamResult<f64> {
        if state.len() != self.dim() {
            return Err(HamError::DimensionMismatch {
                expected: self.dim(),
                got: state.len(),
            });
        }
        let h_state = self.matrix.dot(state);
        let mut value = Complex64::new(0.0, 0.0);
        for (amp, h_amp) in state.iter().zip(h_state.iter()) {
            value += amp.conj() * h_amp;
        }
        if value.im.abs() > EPSILON {
            return Err(HamError::ComplexResidue {
                residue: value.im.abs(),
            });
        }
        Ok(value.re)
    }

    /// Diagonalize the operator (`H = U·Λ·U†`).
    pub fn eigendecompose(&self) -> HamResult<EigenDecomposition> {
        EigenDecomposition::of_hermitian(&self.matrix)
    }

    /// Smallest eigenvalue and its eigenvector.
    ///
    /// Full diagonalization — a correctness oracle for small registers,
    /// not a hot-path operation.
    pub fn ground_state(&self) -> HamResult<(f64, Array1<Complex64>)> {
        Ok(self.eigendecompose()?.ground_state())
    }
}

fn hermiticity_deviation(matrix: &Array2<Complex64>) -> f64 {
    let n = matrix.nrows();
    let mut max = 0.0f64;
    for i in 0..n {
        for j in i..n {
            let dev = (matrix[[i, j]] - matrix[[j, i]].conj()).norm();
            if dev > max {
                max = dev;
            }
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::bits_of;
    use alsvid_model::binary_to_spin;
    use ndarray::array;

    fn ising(h: Array1<f64>, j: Array2<f64>, offset: f64) -> IsingProblem {
        IsingProblem::new(h, j, offset).unwrap()
    }

    #[test]
    fn ceiling_is_enforced_before_allocation() {
        let builder = OperatorBuilder::new(BuilderConfig::default().with_max_qubits(2));
        let three = ising(Array1::zeros(3), Array2::zeros((3, 3)), 0.0);
        assert!(matches!(
            builder.problem_operator(&three),
            Err(HamError::QubitCeilingExceeded {
                requested: 3,
                ceiling: 2
            })
        ));
    }

    #[test]
    fn problem_operator_diagonal_matches_classical_energy() {
        let problem = ising(
            array![0.5, -1.0, 0.25],
            array![
                [0.0, 1.0, 0.0],
                [1.0, 0.0, -0.5],
                [0.0, -0.5, 0.0],
            ],
            2.0,
        );
        let builder = OperatorBuilder::new(BuilderConfig::default());
        let op = builder.problem_operator(&problem).unwrap();

        for k in 0..op.dim() {
            let spins = binary_to_spin(&bits_of(k, 3));
            let classical = problem.energy(&spins) - problem.offset();
            assert!(
                (op.matrix()[[k, k]].re - classical).abs() < 1e-12,
                "diagonal mismatch at basis state {k}"
            );
        }
    }

    #[test]
    fn problem_operator_is_diagonal() {
        let problem = ising(array![1.0, -2.0], array![[0.0, 3.0], [3.0, 0.0]], 0.0);
        let op = OperatorBuilder::new(BuilderConfig::default())
            .problem_operator(&problem)
            .unwrap();
        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    assert_eq!(op.matrix()[[i, j]], Complex64::new(0.0, 0.0));
                }
            }
        }
    }

    #[test]
    fn mixing_operator_spectrum() {
        let op = OperatorBuilder::new(BuilderConfig::default())
            .mixing_operator(2)
            .unwrap();
        let eig = op.eigendecompose().unwrap();
        let vals: Vec<f64> = eig.eigenvalues().to_vec();
        assert!((vals[0] - (-2.0)).abs() < 1e-10);
        assert!(vals[1].abs() < 1e-10);
        assert!(vals[2].abs() < 1e-10);
        assert!((vals[3] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn from_matrix_rejects_non_hermitian() {
        let m = array![
            [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
            [Complex64::new(0.5, 0.0), Complex64::new(0.0, 0.0)],
        ];
        assert!(matches!(
            Operator::from_matrix(m, EPSILON),
            Err(HamError::NotHermitian { .. })
        ));
    }

    #[test]
    fn expectation_of_basis_state_reads_the_diagonal() {
        let problem = ising(array![1.0, 0.0], array![[0.0, 0.0], [0.0, 0.0]], 0.0);
        let op = OperatorBuilder::new(BuilderConfig::default())
            .problem_operator(&problem)
            .unwrap();
        // |10⟩ (index 2): qubit 0 measured 1 → Z₀ = −1.
        let mut state = Array1::zeros(4);
        state[2] = Complex64::new(1.0, 0.0);
        assert!((op.expectation(&state).unwrap() - (-1.0)).abs() < 1e-12);
    }
}

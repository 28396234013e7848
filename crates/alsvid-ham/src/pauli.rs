//! Single-qubit Pauli primitives and tensor-product placement.
//!
//! The four fixed 2×2 operators are the only building blocks for
//! multi-qubit operators; everything larger is an iterated tensor product
//! in the qubit-0-leftmost ordering (see [`crate::basis`]).

use ndarray::{Array2, array, linalg::kron};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pauli {
    /// Identity.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl Pauli {
    /// The fixed 2×2 matrix of this operator.
    pub fn matrix(self) -> Array2<Complex64> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        match self {
            Pauli::I => array![[one, zero], [zero, one]],
            Pauli::X => array![[zero, one], [one, zero]],
            Pauli::Y => array![[zero, -i], [i, zero]],
            Pauli::Z => array![[one, zero], [zero, -one]],
        }
    }
}

/// Build the n-qubit operator acting as `op` on `index` and identity
/// elsewhere.
///
/// # Panics
/// Panics if `index >= n`. Ceiling enforcement happens in the builder,
/// which is the only caller that sizes operators from external input.
pub fn operator_on_qubit(op: Pauli, index: usize, n: usize) -> Array2<Complex64> {
    assert!(index < n, "qubit index {index} out of range for {n} qubits");
    pauli_string_operator(&[(index, op)], n)
}

/// Build the n-qubit tensor product with the given operators at the given
/// qubit indices and identity on every other factor.
///
/// Later entries for the same qubit override earlier ones; qubit 0 is the
/// leftmost factor.
pub fn pauli_string_operator(ops: &[(usize, Pauli)], n: usize) -> Array2<Complex64> {
    let mut factors = vec![Pauli::I; n];
    for &(q, op) in ops {
        assert!(q < n, "qubit index {q} out of range for {n} qubits");
        factors[q] = op;
    }
    let mut acc = Array2::from_elem((1, 1), Complex64::new(1.0, 0.0));
    for factor in factors {
        acc = kron(&acc, &factor.matrix());
    }
    acc
}

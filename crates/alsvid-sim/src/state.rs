//! Simulated quantum state.

use ndarray::Array1;
use num_complex::Complex64;

/// A normalized state vector over an n-qubit register.
///
/// Created and mutated only within a single simulation call; unit norm
/// holds outside in-progress mutation and is asserted after evolution.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    amplitudes: Array1<Complex64>,
    num_qubits: usize,
}

impl StateVector {
    /// The uniform superposition `2^{−n/2}·𝟙` — the state reached by a
    /// uniform single-qubit rotation on every qubit of `|0…0⟩`.
    pub fn uniform(num_qubits: usize) -> Self {
        let dim = 1usize << num_qubits;
        let amp = Complex64::new(1.0 / (dim as f64).sqrt(), 0.0);
        Self {
            amplitudes: Array1::from_elem(dim, amp),
            num_qubits,
        }
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// State dimension (2ⁿ).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// The complex amplitudes.
    pub fn amplitudes(&self) -> &Array1<Complex64> {
        &self.amplitudes
    }

    /// Mutable amplitudes, for in-place evolution.
    pub(crate) fn amplitudes_mut(&mut self) -> &mut Array1<Complex64> {
        &mut self.amplitudes
    }

    /// Euclidean norm of the state.
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Squared-amplitude probabilities `p_k = |ψ_k|²`.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_state_has_unit_norm() {
        let state = StateVector::uniform(3);
        assert_eq!(state.dim(), 8);
        assert!((state.norm() - 1.0).abs() < 1e-12);
        for p in state.probabilities() {
            assert!((p - 0.125).abs() < 1e-12);
        }
    }
}

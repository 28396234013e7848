//! Variational parameter schedules (γ, β).

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// An ordered pair of angle schedules for a depth-p layered evolution:
/// `gammas[k]` drives the problem operator in layer k, `betas[k]` the
/// mixing operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    gammas: Vec<f64>,
    betas: Vec<f64>,
}

impl Parameters {
    /// Construct from explicit schedules of equal, non-zero length.
    pub fn new(gammas: Vec<f64>, betas: Vec<f64>) -> SimResult<Self> {
        if gammas.len() != betas.len() {
            return Err(SimError::UnevenSchedules {
                gammas: gammas.len(),
                betas: betas.len(),
            });
        }
        if gammas.is_empty() {
            return Err(SimError::ZeroLayers);
        }
        Ok(Self { gammas, betas })
    }

    /// A constant schedule, the deterministic starting guess.
    pub fn constant(depth: usize, gamma: f64, beta: f64) -> SimResult<Self> {
        Self::new(vec![gamma; depth], vec![beta; depth])
    }

    /// Layer depth p.
    pub fn depth(&self) -> usize {
        self.gammas.len()
    }

    /// The problem-operator angles γ₁..γ_p.
    pub fn gammas(&self) -> &[f64] {
        &self.gammas
    }

    /// The mixing-operator angles β₁..β_p.
    pub fn betas(&self) -> &[f64] {
        &self.betas
    }

    /// Flatten to the optimizer layout: γ first, then β.
    pub fn to_flat(&self) -> Vec<f64> {
        self.gammas.iter().chain(self.betas.iter()).copied().collect()
    }

    /// Rebuild from the optimizer layout.
    pub fn from_flat(depth: usize, flat: &[f64]) -> SimResult<Self> {
        if flat.len() != 2 * depth {
            return Err(SimError::ParameterLength {
                expected: 2 * depth,
                depth,
                got: flat.len(),
            });
        }
        Self::new(flat[..depth].to_vec(), flat[depth..].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_round_trip() {
        let p = Parameters::new(vec![0.1, 0.2], vec![0.3, 0.4]).unwrap();
        let flat = p.to_flat();
        assert_eq!(flat, vec![0.1, 0.2, 0.3, 0.4]);
        assert_eq!(Parameters::from_flat(2, &flat).unwrap(), p);
    }

    #[test]
    fn rejects_uneven_schedules() {
        assert!(matches!(
            Parameters::new(vec![0.1], vec![0.2, 0.3]),
            Err(SimError::UnevenSchedules { gammas: 1, betas: 2 })
        ));
    }

    #[test]
    fn rejects_zero_depth() {
        assert!(matches!(
            Parameters::new(vec![], vec![]),
            Err(SimError::ZeroLayers)
        ));
    }
}

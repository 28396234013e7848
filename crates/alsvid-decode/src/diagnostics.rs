//! Distribution diagnostics.

use serde::{Deserialize, Serialize};

use alsvid_model::ProblemKind;
use alsvid_sim::MeasurementDistribution;

use crate::candidate::{decode, validate};

/// Summary statistics of a measurement distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionDiagnostics {
    /// Shannon entropy of the outcome probabilities, in bits.
    pub entropy: f64,
    /// Entropy divided by the register width n (log₂ of the 2ⁿ outcome
    /// space): 1.0 for the uniform distribution over all bitstrings, 0.0
    /// for a single outcome.
    pub normalized_entropy: f64,
    /// Probability of the most frequent outcome.
    pub concentration: f64,
    /// Count-weighted fraction of outcomes that decode to a valid
    /// candidate before repair.
    pub validity_rate: f64,
}

/// Compute diagnostics; a pure function of the distribution and the
/// problem-kind tag.
pub fn diagnostics(
    distribution: &MeasurementDistribution,
    kind: ProblemKind,
) -> DistributionDiagnostics {
    let total = distribution.total_shots();
    if total == 0 {
        return DistributionDiagnostics {
            entropy: 0.0,
            normalized_entropy: 0.0,
            concentration: 0.0,
            validity_rate: 0.0,
        };
    }

    let mut entropy = 0.0;
    let mut concentration = 0.0f64;
    let mut valid_count = 0u64;
    for (bits, count) in distribution.outcomes() {
        let p = count as f64 / total as f64;
        entropy -= p * p.log2();
        concentration = concentration.max(p);
        if validate(&decode(bits, kind), kind) {
            valid_count += count;
        }
    }

    let num_bits = distribution.num_bits();
    let normalized_entropy = if num_bits == 0 {
        0.0
    } else {
        entropy / num_bits as f64
    };

    DistributionDiagnostics {
        entropy,
        normalized_entropy,
        concentration,
        validity_rate: valid_count as f64 / total as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(counts: Vec<(&str, u64)>) -> MeasurementDistribution {
        let num_bits = counts[0].0.len();
        MeasurementDistribution::from_counts(
            num_bits,
            counts
                .into_iter()
                .map(|(s, c)| (s.chars().map(|ch| ch == '1').collect(), c)),
        )
    }

    #[test]
    fn uniform_distribution_has_unit_normalized_entropy() {
        let d = dist(vec![("00", 25), ("01", 25), ("10", 25), ("11", 25)]);
        let diag = diagnostics(&d, ProblemKind::Generic);
        assert!((diag.entropy - 2.0).abs() < 1e-12);
        assert!((diag.normalized_entropy - 1.0).abs() < 1e-12);
        assert!((diag.concentration - 0.25).abs() < 1e-12);
        assert!((diag.validity_rate - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_outcome_has_zero_entropy() {
        let d = dist(vec![("10", 64)]);
        let diag = diagnostics(&d, ProblemKind::Cut);
        assert!(diag.entropy.abs() < 1e-12);
        assert!(diag.normalized_entropy.abs() < 1e-12);
        assert!((diag.concentration - 1.0).abs() < 1e-12);
    }

    #[test]
    fn validity_rate_counts_pre_repair_candidates() {
        // "0110" decodes to the permutation (1, 0); "1010" decodes to the
        // clash (0, 0).
        let d = dist(vec![("0110", 30), ("1010", 10)]);
        let diag = diagnostics(&d, ProblemKind::Assignment);
        assert!((diag.validity_rate - 0.75).abs() < 1e-12);
    }

    #[test]
    fn empty_distribution_is_all_zeros() {
        let d = MeasurementDistribution::new(2);
        let diag = diagnostics(&d, ProblemKind::Generic);
        assert_eq!(diag.entropy, 0.0);
        assert_eq!(diag.validity_rate, 0.0);
    }
}

//! Outcome ranking and feasible-solution selection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use alsvid_model::ProblemKind;
use alsvid_sim::MeasurementDistribution;

use crate::candidate::{Candidate, decode, repair, validate};

/// One ranked measurement outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedOutcome {
    /// The measured bitstring (qubit 0 first).
    pub bits: Vec<bool>,
    /// Empirical probability `count / total_shots`.
    pub probability: f64,
    /// Raw sample count.
    pub count: u64,
}

/// The `top_k` outcomes by descending probability; ties break by
/// ascending lexicographic bitstring, so the order is total and
/// reproducible.
pub fn rank(distribution: &MeasurementDistribution, top_k: usize) -> Vec<RankedOutcome> {
    let total = distribution.total_shots();
    let mut entries: Vec<RankedOutcome> = distribution
        .outcomes()
        .map(|(bits, count)| RankedOutcome {
            bits: bits.clone(),
            probability: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.bits.cmp(&b.bits)));
    entries.truncate(top_k);
    entries
}

/// A decoded, scored candidate with its measurement provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedSolution {
    /// The (possibly repaired) candidate.
    pub candidate: Candidate,
    /// Whether the candidate satisfies its structural constraint.
    pub valid: bool,
    /// Whether repair changed the raw decode.
    pub repaired: bool,
    /// Score from the caller's objective (lower is better).
    pub objective: f64,
    /// The source bitstring.
    pub bits: Vec<bool>,
    /// Measured probability of the source bitstring.
    pub probability: f64,
    /// Rank of the source bitstring (0 = most probable).
    pub rank: usize,
}

/// Decode (and repair where needed) outcomes in rank order and return the
/// first feasible candidate, scored by `objective_fn` (lower is better).
///
/// If no outcome yields a feasible candidate even after repair, the
/// best-scoring infeasible one is returned with `valid = false`. Only an
/// empty distribution returns `None`; this function never panics on
/// malformed candidates.
pub fn best_feasible<F>(
    distribution: &MeasurementDistribution,
    kind: ProblemKind,
    objective_fn: F,
) -> Option<DecodedSolution>
where
    F: Fn(&Candidate) -> f64,
{
    let ranked = rank(distribution, distribution.num_outcomes());
    let mut fallback: Option<DecodedSolution> = None;

    for (position, outcome) in ranked.into_iter().enumerate() {
        let raw = decode(&outcome.bits, kind);
        if validate(&raw, kind) {
            let objective = objective_fn(&raw);
            return Some(DecodedSolution {
                candidate: raw,
                valid: true,
                repaired: false,
                objective,
                bits: outcome.bits,
                probability: outcome.probability,
                rank: position,
            });
        }

        let (fixed, repaired) = repair(raw, kind);
        let objective = objective_fn(&fixed);
        if validate(&fixed, kind) {
            debug!(rank = position, "returning repaired candidate");
            return Some(DecodedSolution {
                candidate: fixed,
                valid: true,
                repaired,
                objective,
                bits: outcome.bits,
                probability: outcome.probability,
                rank: position,
            });
        }

        let better = fallback
            .as_ref()
            .is_none_or(|b| objective < b.objective);
        if better {
            fallback = Some(DecodedSolution {
                candidate: fixed,
                valid: false,
                repaired,
                objective,
                bits: outcome.bits,
                probability: outcome.probability,
                rank: position,
            });
        }
    }

    fallback
}

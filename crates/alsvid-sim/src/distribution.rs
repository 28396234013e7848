//! Measurement distributions from sampled final states.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Counts of sampled basis-state outcomes, keyed by bitstring (qubit 0
/// first, the workspace-wide ordering).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementDistribution {
    num_bits: usize,
    counts: FxHashMap<Vec<bool>, u64>,
    total: u64,
}

impl MeasurementDistribution {
    /// An empty distribution over bitstrings of the given length.
    pub fn new(num_bits: usize) -> Self {
        Self {
            num_bits,
            counts: FxHashMap::default(),
            total: 0,
        }
    }

    /// Build a distribution from pre-aggregated counts.
    pub fn from_counts(
        num_bits: usize,
        counts: impl IntoIterator<Item = (Vec<bool>, u64)>,
    ) -> Self {
        let mut dist = Self::new(num_bits);
        for (bits, count) in counts {
            debug_assert_eq!(bits.len(), num_bits);
            dist.total += count;
            *dist.counts.entry(bits).or_insert(0) += count;
        }
        dist
    }

    /// Record one sampled outcome.
    pub(crate) fn record(&mut self, bits: Vec<bool>) {
        debug_assert_eq!(bits.len(), self.num_bits);
        *self.counts.entry(bits).or_insert(0) += 1;
        self.total += 1;
    }

    /// Bitstring length.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Total number of recorded shots.
    pub fn total_shots(&self) -> u64 {
        self.total
    }

    /// Number of distinct outcomes observed.
    pub fn num_outcomes(&self) -> usize {
        self.counts.len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The count of one outcome (0 if never observed).
    pub fn count(&self, bits: &[bool]) -> u64 {
        self.counts.get(bits).copied().unwrap_or(0)
    }

    /// The empirical probability of one outcome.
    pub fn probability(&self, bits: &[bool]) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(bits) as f64 / self.total as f64
        }
    }

    /// Iterate over `(bitstring, count)` pairs in arbitrary order.
    pub fn outcomes(&self) -> impl Iterator<Item = (&Vec<bool>, u64)> {
        self.counts.iter().map(|(bits, &count)| (bits, count))
    }
}

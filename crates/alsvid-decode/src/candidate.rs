//! Candidate solutions: decode, validate, repair.
//!
//! Index layouts per problem kind:
//!
//! - **Assignment / Cycle** — the n² bits form an n×n one-hot grid where
//!   bit `i·n + j` means "item i occupies slot j". Decoding reads the
//!   first set bit per row (slot 0 for an empty row); the permutation
//!   structure is restored by [`repair`] when violated.
//! - **Cut** — bit i is the partition side of element i, 1:1.
//! - **Generic** — the bits are the solution as-is.

use serde::{Deserialize, Serialize};

use alsvid_model::ProblemKind;

/// A problem-specific raw candidate decoded from one bitstring.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Candidate {
    /// Ordered sequence: entry i is the slot (or tour position) of item i.
    Sequence(Vec<usize>),
    /// Two-way partition: entry i is the side of element i.
    Partition(Vec<bool>),
    /// Unconstrained raw bits.
    Bits(Vec<bool>),
}

/// Decode a flat bitstring into a raw candidate for the given kind.
pub fn decode(bits: &[bool], kind: ProblemKind) -> Candidate {
    match kind {
        ProblemKind::Assignment | ProblemKind::Cycle => {
            Candidate::Sequence(decode_sequence(bits))
        }
        ProblemKind::Cut => Candidate::Partition(bits.to_vec()),
        ProblemKind::Generic => Candidate::Bits(bits.to_vec()),
    }
}

/// Read the n×n one-hot grid row by row; first set bit wins, an empty
/// row decodes to slot 0. Never fails — structural violations surface
/// through [`validate`].
fn decode_sequence(bits: &[bool]) -> Vec<usize> {
    let n = bits.len().isqrt();
    (0..n)
        .map(|i| {
            bits[i * n..(i + 1) * n]
                .iter()
                .position(|&b| b)
                .unwrap_or(0)
        })
        .collect()
}

/// Whether a candidate satisfies the structural constraint of its kind.
///
/// Sequences must be bijections on `{0..n−1}`; cut and generic candidates
/// are always valid. A candidate whose shape does not match the kind is
/// invalid.
pub fn validate(candidate: &Candidate, kind: ProblemKind) -> bool {
    match (candidate, kind) {
        (Candidate::Sequence(seq), ProblemKind::Assignment | ProblemKind::Cycle) => {
            is_permutation(seq)
        }
        (Candidate::Partition(_), ProblemKind::Cut) => true,
        (Candidate::Bits(_), ProblemKind::Generic) => true,
        _ => false,
    }
}

fn is_permutation(seq: &[usize]) -> bool {
    let n = seq.len();
    let mut seen = vec![false; n];
    for &v in seq {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// Deterministically repair a candidate, returning it with a flag telling
/// whether anything changed.
///
/// For sequences: out-of-range entries are clamped into range, then every
/// duplicate value (in scan order) is replaced by the smallest value still
/// missing. Repairing a valid candidate is a no-op with `repaired = false`,
/// so the operation is idempotent. Cut and generic candidates need no
/// repair.
pub fn repair(candidate: Candidate, kind: ProblemKind) -> (Candidate, bool) {
    match (candidate, kind) {
        (Candidate::Sequence(seq), ProblemKind::Assignment | ProblemKind::Cycle) => {
            let (fixed, repaired) = repair_sequence(seq);
            (Candidate::Sequence(fixed), repaired)
        }
        (other, _) => (other, false),
    }
}

fn repair_sequence(mut seq: Vec<usize>) -> (Vec<usize>, bool) {
    let n = seq.len();
    if n == 0 {
        return (seq, false);
    }
    let mut repaired = false;

    for v in &mut seq {
        if *v >= n {
            *v = n - 1;
            repaired = true;
        }
    }

    let mut seen = vec![false; n];
    let mut duplicates = Vec::new();
    for (i, &v) in seq.iter().enumerate() {
        if seen[v] {
            duplicates.push(i);
        } else {
            seen[v] = true;
        }
    }
    let mut missing = (0..n).filter(|&v| !seen[v]);
    for i in duplicates {
        if let Some(value) = missing.next() {
            seq[i] = value;
            repaired = true;
        }
    }
    (seq, repaired)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_one_hot_rows() {
        // 2×2 grid: item 0 → slot 1, item 1 → slot 0.
        let bits = [false, true, true, false];
        assert_eq!(
            decode(&bits, ProblemKind::Assignment),
            Candidate::Sequence(vec![1, 0])
        );
    }

    #[test]
    fn empty_row_decodes_to_slot_zero() {
        let bits = [false, false, true, false];
        assert_eq!(
            decode(&bits, ProblemKind::Cycle),
            Candidate::Sequence(vec![0, 0])
        );
    }

    #[test]
    fn multiple_set_bits_take_the_first() {
        let bits = [true, true, false, true];
        assert_eq!(
            decode(&bits, ProblemKind::Assignment),
            Candidate::Sequence(vec![0, 1])
        );
    }

    #[test]
    fn cut_decodes_one_to_one() {
        let bits = [true, false, true];
        assert_eq!(
            decode(&bits, ProblemKind::Cut),
            Candidate::Partition(vec![true, false, true])
        );
    }

    #[test]
    fn validates_permutations_only() {
        let perm = Candidate::Sequence(vec![2, 0, 1]);
        let dup = Candidate::Sequence(vec![0, 0, 2]);
        assert!(validate(&perm, ProblemKind::Assignment));
        assert!(!validate(&dup, ProblemKind::Assignment));
        assert!(validate(
            &Candidate::Partition(vec![true, false]),
            ProblemKind::Cut
        ));
    }

    #[test]
    fn repair_fills_with_smallest_missing() {
        // One duplicate (0) and one missing value (1).
        let (fixed, repaired) = repair(
            Candidate::Sequence(vec![0, 0, 2]),
            ProblemKind::Assignment,
        );
        assert!(repaired);
        assert_eq!(fixed, Candidate::Sequence(vec![0, 1, 2]));
        assert!(validate(&fixed, ProblemKind::Assignment));
    }

    #[test]
    fn repair_is_idempotent() {
        let (fixed, first) = repair(
            Candidate::Sequence(vec![3, 3, 0, 0]),
            ProblemKind::Cycle,
        );
        assert!(first);
        let (again, second) = repair(fixed.clone(), ProblemKind::Cycle);
        assert!(!second);
        assert_eq!(again, fixed);
    }

    #[test]
    fn repair_clamps_out_of_range() {
        let (fixed, repaired) = repair(
            Candidate::Sequence(vec![9, 1, 0]),
            ProblemKind::Assignment,
        );
        assert!(repaired);
        assert_eq!(fixed, Candidate::Sequence(vec![2, 1, 0]));
    }

    #[test]
    fn repair_leaves_valid_input_untouched() {
        let (fixed, repaired) = repair(
            Candidate::Sequence(vec![1, 2, 0]),
            ProblemKind::Assignment,
        );
        assert!(!repaired);
        assert_eq!(fixed, Candidate::Sequence(vec![1, 2, 0]));
    }
}

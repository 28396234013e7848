//! Problem-kind tag used for decode dispatch.

use serde::{Deserialize, Serialize};

/// The structural family of an encoded problem.
///
/// Decode, validation and repair behavior is resolved by matching on this
/// tag — there is no string-based dispatch anywhere in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProblemKind {
    /// Assignment-style problem: n items onto n slots, n×n one-hot layout.
    Assignment,
    /// Cycle-style (tour) problem: n stops over n positions, n×n one-hot layout.
    Cycle,
    /// Cut-style problem: one bit per element, direct partition.
    Cut,
    /// No structural constraint; bits are the solution as-is.
    Generic,
}

impl ProblemKind {
    /// Short name for logging and display.
    pub fn name(&self) -> &'static str {
        match self {
            ProblemKind::Assignment => "assignment",
            ProblemKind::Cycle => "cycle",
            ProblemKind::Cut => "cut",
            ProblemKind::Generic => "generic",
        }
    }
}

impl std::fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

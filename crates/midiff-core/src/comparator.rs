//! Comparator — positional, line-by-line diff of two dumps.
//!
//! Lines are paired by index only. There is no resynchronisation: one extra
//! line in either dump shifts every later pair and each shifted pair is
//! reported on its own. The shorter dump is padded with empty lines.

use tracing::debug;

use crate::normalizer::collapse_whitespace;
use crate::types::{Comparison, Divergence};

/// Prefix of reference-only annotation lines (`MetaMessage(...)`).
pub const DEFAULT_METADATA_PREFIX: &str = "Meta";

/// Compares a reference dump against a normalized candidate dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparator {
    metadata_prefix: String,
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new(DEFAULT_METADATA_PREFIX)
    }
}

impl Comparator {
    /// A comparator that skips reference lines starting with `metadata_prefix`
    /// (after whitespace collapsing). An empty prefix disables skipping.
    pub fn new(metadata_prefix: impl Into<String>) -> Self {
        Self {
            metadata_prefix: metadata_prefix.into(),
        }
    }

    pub fn metadata_prefix(&self) -> &str {
        &self.metadata_prefix
    }

    fn is_metadata(&self, normalized_reference: &str) -> bool {
        !self.metadata_prefix.is_empty() && normalized_reference.starts_with(&self.metadata_prefix)
    }

    /// Compare the two dumps and report every divergence in line order.
    pub fn run(&self, reference: &str, candidate: &str) -> Comparison {
        let reference_lines: Vec<&str> = reference.lines().collect();
        let candidate_lines: Vec<&str> = candidate.lines().collect();
        let total = reference_lines.len().max(candidate_lines.len());

        let mut outcome = Comparison::default();
        for index in 0..total {
            let reference_line = reference_lines.get(index).copied().unwrap_or("");
            let candidate_line = candidate_lines.get(index).copied().unwrap_or("");
            let normalized_reference = collapse_whitespace(reference_line);
            let normalized_candidate = collapse_whitespace(candidate_line);

            if self.is_metadata(&normalized_reference) {
                outcome.lines_skipped += 1;
                continue;
            }
            outcome.lines_compared += 1;

            if normalized_reference != normalized_candidate {
                outcome.divergences.push(Divergence {
                    line: index + 1,
                    reference: reference_line.to_string(),
                    candidate: candidate_line.to_string(),
                    normalized_reference,
                    normalized_candidate,
                });
            }
        }

        debug!(
            reference_lines = reference_lines.len(),
            candidate_lines = candidate_lines.len(),
            compared = outcome.lines_compared,
            skipped = outcome.lines_skipped,
            divergences = outcome.divergences.len(),
            "compared dumps"
        );
        outcome
    }
}

/// Compare with the default metadata prefix, returning only the divergences.
pub fn compare(reference: &str, candidate: &str) -> Vec<Divergence> {
    Comparator::default().run(reference, candidate).divergences
}

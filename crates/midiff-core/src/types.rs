//! Core types for midiff-core.
//!
//! This module defines the data produced by the comparator and consumed by
//! the report renderers: a single [`Divergence`] between two dumps and the
//! overall [`Comparison`] outcome.

use serde::Serialize;

/// One line position at which the reference dump and the normalized
/// candidate dump disagree.
///
/// Produced only when the whitespace-collapsed forms differ and the reference
/// line is not a metadata annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Divergence {
    /// 1-based line number, as printed in reports.
    pub line: usize,
    /// Reference line exactly as it appeared in the trusted dump (empty if
    /// the reference dump is shorter).
    pub reference: String,
    /// Candidate line exactly as it appeared in the normalized dump (empty if
    /// the candidate dump is shorter).
    pub candidate: String,
    /// `reference` with whitespace runs collapsed and ends trimmed.
    pub normalized_reference: String,
    /// `candidate` with whitespace runs collapsed and ends trimmed.
    pub normalized_candidate: String,
}

impl Divergence {
    /// Zero-based line index into both dumps. A hand-built divergence with
    /// `line: 0` maps to index 0.
    pub fn index(&self) -> usize {
        self.line.saturating_sub(1)
    }
}

impl std::fmt::Display for Divergence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}: {:?} != {:?}",
            self.line, self.normalized_reference, self.normalized_candidate
        )
    }
}

/// Outcome of comparing a reference dump against a normalized candidate dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Line positions that were actually compared.
    pub lines_compared: usize,
    /// Line positions skipped because the reference line was a metadata
    /// annotation.
    pub lines_skipped: usize,
    /// Every divergence, in ascending line order.
    pub divergences: Vec<Divergence>,
}

impl Comparison {
    /// `true` when no divergence was found.
    pub fn is_equivalent(&self) -> bool {
        self.divergences.is_empty()
    }

    /// The earliest divergence, if any.
    pub fn first_divergence(&self) -> Option<&Divergence> {
        self.divergences.first()
    }
}

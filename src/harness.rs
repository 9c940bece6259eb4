//! Harness — obtains both dumps, normalizes the candidate and compares.

use anyhow::Context;
use midiff_core::config::Config;
use midiff_core::{Comparator, Comparison, DumpSummary, MetaMarker, Normalizer};
use midiff_sources::DumpSource;

/// The normalizer and comparator configured for one run.
#[derive(Debug)]
pub struct Harness {
    normalizer: Normalizer,
    comparator: Comparator,
    track_separator: String,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(&Config::defaults())
    }
}

impl Harness {
    pub fn new(config: &Config) -> Self {
        Self {
            normalizer: Normalizer::standard(),
            comparator: Comparator::new(config.compare.metadata_prefix.clone()),
            track_separator: config.compare.track_separator.clone(),
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Compare already-obtained texts. `candidate` is in the candidate
    /// vocabulary and is normalized first.
    pub fn check_texts(&self, reference: &str, candidate: &str) -> Comparison {
        let normalized = self.normalizer.normalize(candidate);
        self.comparator.run(reference, &normalized)
    }

    /// Read both dumps, then compare. Failing to read either dump is an error
    /// and the comparison is not attempted.
    pub fn check(
        &self,
        reference: &dyn DumpSource,
        candidate: &dyn DumpSource,
    ) -> anyhow::Result<Comparison> {
        let reference_text = reference
            .read()
            .with_context(|| format!("reading reference dump from {}", reference.describe()))?;
        let candidate_text = candidate
            .read()
            .with_context(|| format!("reading candidate dump from {}", candidate.describe()))?;

        let comparison = self.check_texts(&reference_text, &candidate_text);
        tracing::info!(
            reference = %reference.describe(),
            candidate = %candidate.describe(),
            divergences = comparison.divergences.len(),
            "check finished"
        );
        Ok(comparison)
    }

    /// Summarise a dump. Candidate dumps are normalized first, and their meta
    /// lines are the ones that are not channel or sysex events.
    pub fn summarize(&self, text: &str, is_candidate: bool) -> DumpSummary {
        if is_candidate {
            let normalized = self.normalizer.normalize(text);
            DumpSummary::from_text(&normalized, &self.track_separator, MetaMarker::NonEvent)
        } else {
            let marker = MetaMarker::Prefix(self.comparator.metadata_prefix());
            DumpSummary::from_text(text, &self.track_separator, marker)
        }
    }
}

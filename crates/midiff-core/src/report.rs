//! Report rendering — human-readable and JSON views of a [`Comparison`].

use crate::types::Comparison;
use crate::Result;

/// Message printed when the dumps are equivalent.
pub const ALL_MATCH: &str = "No differences found! Dumps are identical (ignoring excessive spaces).";

const RULE: &str = "--------------------------------------------------";

/// Output format selectable from the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format {other:?} (expected text or json)")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a comparison in the requested format.
pub fn render(comparison: &Comparison, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(comparison)),
        OutputFormat::Json => render_json(comparison),
    }
}

/// One block per divergence, or the all-match confirmation.
pub fn render_text(comparison: &Comparison) -> String {
    comparison.to_string()
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_equivalent() {
            return writeln!(f, "{ALL_MATCH}");
        }
        for divergence in &self.divergences {
            writeln!(f, "Difference at line {}:", divergence.line)?;
            writeln!(f, "  Reference: {}", divergence.reference)?;
            writeln!(f, "  Candidate: {}", divergence.candidate)?;
            writeln!(f, "  Normalized reference: '{}'", divergence.normalized_reference)?;
            writeln!(f, "  Normalized candidate: '{}'", divergence.normalized_candidate)?;
            writeln!(f, "{RULE}")?;
        }
        Ok(())
    }
}

/// Pretty-printed JSON of the whole comparison.
pub fn render_json(comparison: &Comparison) -> Result<String> {
    Ok(serde_json::to_string_pretty(comparison)?)
}

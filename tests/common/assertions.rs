//! Domain-specific assertion macros for midiff harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that show the
//! rendered report, so a failing test says *which* lines diverged.

/// Assert that a `Comparison` found no divergence.
///
/// ```rust
/// assert_equivalent!(harness.check_texts(REFERENCE_DUMP, CANDIDATE_DUMP));
/// ```
#[macro_export]
macro_rules! assert_equivalent {
    ($comparison:expr) => {{
        let comparison: &midiff::Comparison = &$comparison;
        if !comparison.is_equivalent() {
            panic!(
                "assert_equivalent! failed: {} divergence(s)\n{}",
                comparison.divergences.len(),
                midiff_core::report::render_text(comparison)
            );
        }
    }};
}

/// Assert the exact 1-based line numbers at which a `Comparison` diverged.
///
/// ```rust
/// assert_divergent_lines!(comparison, [2, 3]);
/// ```
#[macro_export]
macro_rules! assert_divergent_lines {
    ($comparison:expr, [$($line:expr),* $(,)?]) => {{
        let comparison: &midiff::Comparison = &$comparison;
        let actual: Vec<usize> = comparison.divergences.iter().map(|d| d.line).collect();
        let expected: Vec<usize> = vec![$($line),*];
        pretty_assertions::assert_eq!(
            actual,
            expected,
            "divergent lines differ\n{}",
            midiff_core::report::render_text(comparison)
        );
    }};
}

/// Assert that normalizing `input` produced exactly as many lines as it had.
pub fn assert_line_count_preserved(input: &str, output: &str) {
    assert_eq!(
        input.split('\n').count(),
        output.split('\n').count(),
        "normalize changed the line count\n  input:  {input:?}\n  output: {output:?}"
    );
}

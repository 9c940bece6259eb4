#![allow(unused)]
//! Normalizer integration harness.
//!
//! # What this covers
//!
//! - **Vocabulary rewriting**: every line in `LINE_CASES` must normalize to
//!   its reference-vocabulary form, token for token.
//! - **Whole dumps**: `CANDIDATE_DUMP` must normalize to a text that agrees
//!   with `REFERENCE_DUMP` on every non-meta line.
//! - **Structural invariants** (proptest): line count is preserved, blank
//!   lines are untouched, and no input string makes the normalizer panic.
//! - **Fixed point**: normalizing an already-normalized dump changes nothing.
//!
//! # What this does NOT cover
//!
//! - Comparison policy (see `comparison_harness`)
//! - The CLI surface (see `cli_harness`)
//!
//! # Running
//!
//! ```sh
//! cargo test --test normalization_harness
//! ```

mod common;
use common::*;

use midiff::{normalize, Harness, Normalizer};
use midiff_core::normalizer::collapse_whitespace;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Line-level rewriting
// ---------------------------------------------------------------------------

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn line_cases_normalize_to_reference(#[case] index: usize) {
    let (input, expected) = LINE_CASES[index];
    assert_eq!(normalize(input), expected);
}

/// A line that matches none of the special patterns is only renamed and
/// whitespace-collapsed.
#[test]
fn unknown_event_only_collapsed() {
    assert_eq!(normalize("  PolyTouch  note=60  value=3 "), "PolyTouch note=60 value=3");
}

// ---------------------------------------------------------------------------
// Whole dumps
// ---------------------------------------------------------------------------

#[test]
fn candidate_dump_matches_reference_after_normalization() {
    assert_equivalent!(Harness::default().check_texts(REFERENCE_DUMP, CANDIDATE_DUMP));
}

#[test]
fn normalized_dump_is_a_fixed_point() {
    let once = normalize(CANDIDATE_DUMP);
    assert_eq!(normalize(&once), once);
}

#[test]
fn track_separators_survive() {
    let normalized = normalize(CANDIDATE_DUMP);
    assert_eq!(normalized.lines().filter(|l| *l == "------").count(), 1);
}

#[test]
fn large_dump_normalizes_line_for_line() {
    let (reference, candidate) = note_dumps(2_000);
    assert_eq!(normalize(&candidate), reference);
}

#[test]
fn blank_lines_in_dump_are_untouched() {
    let dump = DumpBuilder::new()
        .line("NoteOn [ch 0] note=60(C4) vel=1 [0]")
        .blank()
        .line("   ")
        .line("NoteOff [ch 0] note=60(C4) vel=0 [5]")
        .build();
    assert_eq!(
        normalize(&dump),
        "note_on channel=0 note=60 velocity=1 time=0\n\n   \nnote_off channel=0 note=60 velocity=0 time=5"
    );
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn line_count_preserved(text in "\\PC*(\n\\PC*){0,8}") {
        let output = normalize(&text);
        assert_line_count_preserved(&text, &output);
    }

    #[test]
    fn whitespace_only_lines_returned_unchanged(line in "[ \t]{0,12}") {
        prop_assert_eq!(Normalizer::standard().normalize_line(&line), line.clone());
        prop_assert_eq!(normalize(&line), line);
    }

    #[test]
    fn collapse_is_idempotent(line in "\\PC*") {
        let once = collapse_whitespace(&line);
        prop_assert_eq!(collapse_whitespace(&once), once);
    }

    #[test]
    fn normalizer_is_total(text in any::<String>()) {
        let _ = normalize(&text);
    }

    #[test]
    fn normalized_lines_have_no_stray_whitespace(
        line in "(NoteOn|SysEx|ProgramChange)( +[a-z]+=[0-9A-F]+| +\\[[0-9]+\\]| +\\[ch [0-9]\\]){0,5}"
    ) {
        let output = normalize(&line);
        prop_assert_eq!(output.trim(), output.as_str());
        prop_assert!(!output.contains("  "));
    }
}

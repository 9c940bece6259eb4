//! midiff — differential verifier for MIDI event dumps.
//!
//! A trusted decoder and a decoder under test each print one line per MIDI
//! message, in different vocabularies. midiff rewrites the candidate dump into
//! the reference vocabulary and reports every line where the two disagree.
//!
//! # Architecture
//!
//! ```text
//! DumpSource (reference) ─────────────────────┐
//!                                             ├──► Comparator ──► report
//! DumpSource (candidate) ──► Normalizer ──────┘
//! ```
//!
//! The engine lives in [`midiff_core`]; the dump sources live in
//! [`midiff_sources`]. This crate wires them together in [`harness`] and
//! ships the `midiff` binary.

pub mod harness;

pub use harness::Harness;
pub use midiff_core::{
    compare, normalize, Comparator, Comparison, Divergence, DumpSummary, Normalizer, OutputFormat,
};
pub use midiff_sources::{DecoderCommand, DumpSource, FileDump, StdinDump};

//! midiff-core — normalization and diff engine for MIDI event dumps.
//!
//! Two dumps of the same MIDI file, one from a trusted decoder and one from a
//! decoder under test, are written in different textual vocabularies. This
//! crate rewrites the candidate dump into the reference vocabulary and then
//! diffs the two line by line.
//!
//! # Architecture
//!
//! ```text
//! candidate text ──► Normalizer ──┐
//!                                 ├──► Comparator ──► Report
//! reference text ─────────────────┘
//! ```
//!
//! Everything here works on plain text and never builds a typed event model.
//! Both the normalizer and the comparator are total: any input string yields
//! a value, so unexpected lines surface as divergences rather than errors.

pub mod comparator;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod report;
pub mod summary;
pub mod types;

pub use comparator::{compare, Comparator};
pub use error::{Error, Result};
pub use normalizer::{normalize, Normalizer, RewriteRule};
pub use report::OutputFormat;
pub use summary::{DumpSummary, MetaMarker};
pub use types::{Comparison, Divergence};

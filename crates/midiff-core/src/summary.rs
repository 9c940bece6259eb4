//! Dump summary — per-track event counts read straight off the text.
//!
//! Works on reference-vocabulary lines (a trusted dump, or a candidate dump
//! after normalization). Tracks are separated by a separator line. The two
//! decoders mark meta events differently, so the caller picks a [`MetaMarker`].

use serde::Serialize;

use crate::normalizer::collapse_whitespace;

/// Separator the trusted decoder prints between tracks.
pub const DEFAULT_TRACK_SEPARATOR: &str = "------";

/// Event counts for a single track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrackSummary {
    /// Every non-blank line, meta lines included.
    pub messages: usize,
    /// `note_on` lines with a non-zero velocity.
    pub notes: usize,
    pub program_changes: usize,
    pub control_changes: usize,
    pub meta: usize,
}

/// Channel-event and sysex keywords of the reference vocabulary.
pub const EVENT_KEYWORDS: &[&str] = &[
    "note_on",
    "note_off",
    "polytouch",
    "control_change",
    "program_change",
    "aftertouch",
    "pitchwheel",
    "sysex",
];

/// How meta lines are recognised in a dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaMarker<'a> {
    /// Lines starting with this prefix, as the trusted decoder prints
    /// `MetaMessage(...)`. An empty prefix marks nothing.
    Prefix(&'a str),
    /// Lines whose first token is not in [`EVENT_KEYWORDS`]. Normalized
    /// candidate dumps print meta events under their own names
    /// (`TrackName ...`, `EndOfTrack ...`).
    NonEvent,
}

impl MetaMarker<'_> {
    fn is_meta(&self, line: &str) -> bool {
        match self {
            MetaMarker::Prefix(prefix) => !prefix.is_empty() && line.starts_with(prefix),
            MetaMarker::NonEvent => line
                .split_whitespace()
                .next()
                .is_some_and(|token| !EVENT_KEYWORDS.contains(&token)),
        }
    }
}

/// Per-track summary of a whole dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DumpSummary {
    pub tracks: Vec<TrackSummary>,
}

fn velocity(line: &str) -> Option<u32> {
    line.split_whitespace()
        .find_map(|field| field.strip_prefix("velocity="))
        .and_then(|value| value.parse().ok())
}

impl TrackSummary {
    fn record(&mut self, line: &str, marker: MetaMarker<'_>) {
        self.messages += 1;
        if marker.is_meta(line) {
            self.meta += 1;
            return;
        }
        match line.split_whitespace().next() {
            Some("note_on") if velocity(line).is_some_and(|v| v > 0) => self.notes += 1,
            Some("program_change") => self.program_changes += 1,
            Some("control_change") => self.control_changes += 1,
            _ => {}
        }
    }
}

impl DumpSummary {
    /// Summarise `text`, splitting tracks on lines equal to `separator` and
    /// counting lines picked out by `marker` as meta events.
    pub fn from_text(text: &str, separator: &str, marker: MetaMarker<'_>) -> Self {
        let mut tracks = vec![TrackSummary::default()];
        let mut seen_any = false;
        for raw in text.lines() {
            let line = collapse_whitespace(raw);
            if line.is_empty() {
                continue;
            }
            seen_any = true;
            if line == separator {
                tracks.push(TrackSummary::default());
                continue;
            }
            if let Some(track) = tracks.last_mut() {
                track.record(&line, marker);
            }
        }
        if !seen_any {
            tracks.clear();
        }
        Self { tracks }
    }

    /// Counts summed over all tracks.
    pub fn totals(&self) -> TrackSummary {
        self.tracks.iter().fold(TrackSummary::default(), |acc, t| TrackSummary {
            messages: acc.messages + t.messages,
            notes: acc.notes + t.notes,
            program_changes: acc.program_changes + t.program_changes,
            control_changes: acc.control_changes + t.control_changes,
            meta: acc.meta + t.meta,
        })
    }
}

impl std::fmt::Display for DumpSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Number of tracks: {}", self.tracks.len())?;
        for (index, track) in self.tracks.iter().enumerate() {
            writeln!(f, "Track {index}:")?;
            writeln!(f, "  Messages: {}", track.messages)?;
            writeln!(f, "  Notes: {}", track.notes)?;
            writeln!(f, "  Program changes: {}", track.program_changes)?;
            writeln!(f, "  Control changes: {}", track.control_changes)?;
            writeln!(f, "  Meta: {}", track.meta)?;
        }
        Ok(())
    }
}

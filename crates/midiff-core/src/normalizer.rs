//! Normalizer — rewrites a candidate dump into the reference vocabulary.
//!
//! Each non-blank line runs through a fixed, ordered pipeline of
//! [`RewriteRule`]s:
//!
//! ```text
//! rename tokens → channel tag → note names → relocate time
//!   → program description → sysex payload → collapse whitespace
//! ```
//!
//! The order is load-bearing: later rules assume the shape produced by the
//! earlier ones, and whitespace collapsing must run last to clean up what
//! the field-moving rules leave behind. Every rule is a pure function of one
//! line; a rule whose trigger pattern is absent returns the line unchanged.
//! No rule can fail, so a malformed line always reaches the comparator.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, trace};

// ---------------------------------------------------------------------------
// Rule trait
// ---------------------------------------------------------------------------

/// A single line-to-line rewrite step.
pub trait RewriteRule: Send + Sync + std::fmt::Debug {
    /// Short identifier used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Rewrite one line. Must return `line` unchanged when the rule's
    /// trigger pattern is absent.
    fn apply(&self, line: &str) -> String;
}

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("built-in rewrite pattern must be a valid regex")
}

// ---------------------------------------------------------------------------
// 1. Token renaming
// ---------------------------------------------------------------------------

/// Candidate keywords and abbreviations with their reference spellings.
pub const RENAMES: &[(&str, &str)] = &[
    ("NoteOn", "note_on"),
    ("NoteOff", "note_off"),
    ("ProgramChange", "program_change"),
    ("ControlChange", "control_change"),
    ("SysEx", "sysex"),
    ("ctrl", "control"),
    ("vel", "velocity"),
    ("val", "value"),
];

static RENAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = RENAMES
        .iter()
        .map(|(from, _)| regex::escape(from))
        .collect::<Vec<_>>()
        .join("|");
    pattern(&format!(r"\b(?:{alternation})\b"))
});

/// Renames event-type keywords and expands field abbreviations.
///
/// All substitutions happen in one regex pass over the original text, so the
/// output of one substitution is never fed to another (`vel` → `velocity`
/// cannot be picked up again by `val` → `value`).
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameTokens;

impl RewriteRule for RenameTokens {
    fn name(&self) -> &'static str {
        "rename_tokens"
    }

    fn apply(&self, line: &str) -> String {
        RENAME_RE
            .replace_all(line, |caps: &Captures| {
                let word = &caps[0];
                RENAMES
                    .iter()
                    .find(|(from, _)| *from == word)
                    .map_or(word, |(_, to)| *to)
                    .to_string()
            })
            .into_owned()
    }
}

// ---------------------------------------------------------------------------
// 2. Channel tag
// ---------------------------------------------------------------------------

static CHANNEL_TAG_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"\[ch\s+([0-9]+)\]"));
static INLINE_CHANNEL_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"\bchannel=([0-9]+)\b"));

/// Rewrites `[ch N]` into an inline `channel=N` field at the tag's position.
///
/// An inline `channel=N` elsewhere on the line that repeats the value of any
/// tag is dropped so the field appears once, where that tag was. A
/// conflicting inline channel is kept and left for the comparator to flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelTag;

impl RewriteRule for ChannelTag {
    fn name(&self) -> &'static str {
        "channel_tag"
    }

    fn apply(&self, line: &str) -> String {
        let tagged: Vec<&str> = CHANNEL_TAG_RE
            .captures_iter(line)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect();
        if tagged.is_empty() {
            return line.to_string();
        }
        let deduped = INLINE_CHANNEL_RE.replace_all(line, |inline: &Captures| {
            if tagged.contains(&&inline[1]) {
                String::new()
            } else {
                inline[0].to_string()
            }
        });
        CHANNEL_TAG_RE
            .replace_all(&deduped, " channel=${1} ")
            .into_owned()
    }
}

// ---------------------------------------------------------------------------
// 3. Note names
// ---------------------------------------------------------------------------

static NOTE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"note=([0-9]+)\([^)]+\)"));

/// Strips the human-readable annotation from `note=N(name)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripNoteName;

impl RewriteRule for StripNoteName {
    fn name(&self) -> &'static str {
        "strip_note_name"
    }

    fn apply(&self, line: &str) -> String {
        NOTE_NAME_RE.replace_all(line, "note=${1}").into_owned()
    }
}

// ---------------------------------------------------------------------------
// 4. Time relocation
// ---------------------------------------------------------------------------

static TICK_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"\[([0-9]+)\]"));

/// Moves the first bracketed tick count `[N]` to the end as `time=N`.
///
/// Every bracketed tick count is removed from its original position; only the
/// first one is re-emitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelocateTime;

impl RewriteRule for RelocateTime {
    fn name(&self) -> &'static str {
        "relocate_time"
    }

    fn apply(&self, line: &str) -> String {
        let Some(caps) = TICK_RE.captures(line) else {
            return line.to_string();
        };
        let ticks = caps[1].to_string();
        let stripped = TICK_RE.replace_all(line, "");
        format!("{} time={ticks}", stripped.trim())
    }
}

// ---------------------------------------------------------------------------
// 5. Program description
// ---------------------------------------------------------------------------

static PROGRAM_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(program=[0-9]+):"));

/// Drops the instrument description after `program=N:`, keeping any
/// relocated `time=` field that follows it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripProgramDescription;

impl RewriteRule for StripProgramDescription {
    fn name(&self) -> &'static str {
        "strip_program_description"
    }

    fn apply(&self, line: &str) -> String {
        let Some(caps) = PROGRAM_RE.captures(line) else {
            return line.to_string();
        };
        let Some(whole) = caps.get(0) else {
            return line.to_string();
        };
        let head = &line[..whole.start()];
        let tail = &line[whole.end()..];
        let kept = tail.find("time=").map_or("", |pos| &tail[pos..]);
        format!("{head}{} {kept}", &caps[1])
    }
}

// ---------------------------------------------------------------------------
// 6. Sysex payload
// ---------------------------------------------------------------------------

static SYSEX_LEN_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"\blen=[0-9]+"));
static SYSEX_BYTES_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"\[([0-9A-Fa-f ]+)\]"));

/// Reshapes sysex lines: drops `len=N`, turns `[F0 43 F7]` into
/// `data=(F0,43,F7)` and lowercases the whole line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysexPayload;

impl RewriteRule for SysexPayload {
    fn name(&self) -> &'static str {
        "sysex_payload"
    }

    fn apply(&self, line: &str) -> String {
        if !line.trim_start().starts_with("sysex") {
            return line.to_string();
        }
        let without_len = SYSEX_LEN_RE.replace_all(line, "");
        SYSEX_BYTES_RE
            .replace_all(&without_len, |caps: &Captures| {
                let bytes: Vec<&str> = caps[1].split_whitespace().collect();
                format!("data=({})", bytes.join(","))
            })
            .to_lowercase()
    }
}

// ---------------------------------------------------------------------------
// 7. Whitespace collapse
// ---------------------------------------------------------------------------

/// Collapse every whitespace run to one space and trim both ends.
///
/// Idempotent: collapsing an already-collapsed line returns it unchanged.
pub fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Final clean-up step; see [`collapse_whitespace`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CollapseWhitespace;

impl RewriteRule for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse_whitespace"
    }

    fn apply(&self, line: &str) -> String {
        collapse_whitespace(line)
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// An ordered rule pipeline applied independently to every non-blank line.
#[derive(Debug)]
pub struct Normalizer {
    rules: Vec<Box<dyn RewriteRule>>,
}

static STANDARD: LazyLock<Normalizer> = LazyLock::new(Normalizer::standard);

impl Default for Normalizer {
    fn default() -> Self {
        Self::standard()
    }
}

impl Normalizer {
    /// Build a pipeline from an explicit rule list, run in the given order.
    pub fn new(rules: Vec<Box<dyn RewriteRule>>) -> Self {
        Self { rules }
    }

    /// The candidate → reference pipeline.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(RenameTokens),
            Box::new(ChannelTag),
            Box::new(StripNoteName),
            Box::new(RelocateTime),
            Box::new(StripProgramDescription),
            Box::new(SysexPayload),
            Box::new(CollapseWhitespace),
        ])
    }

    /// Rule names in execution order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Rewrite a single line. Blank and whitespace-only lines are returned
    /// unchanged.
    pub fn normalize_line(&self, line: &str) -> String {
        if line.trim().is_empty() {
            return line.to_string();
        }
        self.rules.iter().fold(line.to_string(), |current, rule| {
            let next = rule.apply(&current);
            if next != current {
                trace!(rule = rule.name(), before = %current, after = %next, "rule rewrote line");
            }
            next
        })
    }

    /// Rewrite a whole dump, one line at a time.
    ///
    /// The text is split on `\n` and rejoined with `\n`, so the output always
    /// has exactly as many lines as the input. A trailing `\r` is kept on each
    /// line it was found on.
    pub fn normalize(&self, text: &str) -> String {
        let mut rewritten = 0usize;
        let lines: Vec<String> = text
            .split('\n')
            .map(|raw| {
                let (body, eol) = match raw.strip_suffix('\r') {
                    Some(body) => (body, "\r"),
                    None => (raw, ""),
                };
                if body.trim().is_empty() {
                    return raw.to_string();
                }
                let line = self.normalize_line(body);
                if line != body {
                    rewritten += 1;
                }
                format!("{line}{eol}")
            })
            .collect();
        debug!(lines = lines.len(), rewritten, "normalized candidate dump");
        lines.join("\n")
    }
}

/// Normalize `text` with the standard pipeline.
pub fn normalize(text: &str) -> String {
    STANDARD.normalize(text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Test builders — ergonomic constructors for dump texts.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

/// Fluent builder for a dump, one line per call.
///
/// ```rust
/// let dump = DumpBuilder::new()
///     .line("MetaMessage('track_name', name='x', time=0)")
///     .line("note_on channel=0 note=60 velocity=100 time=0")
///     .separator()
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct DumpBuilder {
    lines: Vec<String>,
}

impl DumpBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn separator(self) -> Self {
        self.line("------")
    }

    pub fn blank(self) -> Self {
        self.line("")
    }

    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

/// Copy of `text` with the 1-based line `line` replaced by `replacement`.
pub fn with_line_replaced(text: &str, line: usize, replacement: &str) -> String {
    text.lines()
        .enumerate()
        .map(|(i, l)| if i + 1 == line { replacement } else { l })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Copy of `text` with `extra` inserted before the 1-based line `line`.
pub fn with_line_inserted(text: &str, line: usize, extra: &str) -> String {
    let mut lines: Vec<&str> = text.lines().collect();
    lines.insert(line - 1, extra);
    lines.join("\n")
}

use serde::Serialize;

use crate::core::errors::{Result, ShiftDecodeError};

/// An ordered sequence of text lines.
///
/// Lines are only ever appended; their order mirrors the line order of
/// the original document. No deletion or in-place edit is offered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Message {
    lines: Vec<String>,
}

impl Message {
    /// Create an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split raw text into a message, one entry per line.
    ///
    /// Both `\n` and `\r\n` terminate a line. A trailing terminator does
    /// not produce an extra empty line.
    pub fn from_text(text: &str) -> Self {
        text.lines().map(str::to_string).collect()
    }

    /// Number of lines currently held.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the line at the given 0-based position.
    pub fn line(&self, index: usize) -> Result<&str> {
        self.lines
            .get(index)
            .map(String::as_str)
            .ok_or(ShiftDecodeError::OutOfRange {
                index,
                len: self.lines.len(),
            })
    }

    /// Add `line` as the new last line.
    pub fn append_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Iterates over the lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl FromIterator<String> for Message {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

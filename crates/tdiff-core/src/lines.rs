//! Line sequences: splitting raw text into the lines the engine compares.
//!
//! Lines are compared by exact value. Nothing here trims, folds case, or
//! otherwise normalizes content; callers that want that do it first.

use std::ops::Index;

/// Split raw text into lines.
///
/// Splits on `\n` and nothing else. A `\r` before the `\n` stays in the
/// line, and a final `\n` leaves a trailing `""`, so text that differs only
/// in line endings does not compare as identical. Empty text is one empty
/// line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// An owned, immutable, index-addressable sequence of lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LineSequence {
    lines: Vec<String>,
}

impl LineSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `text` with [`split_lines`] and take ownership of the lines.
    pub fn from_text(text: &str) -> Self {
        split_lines(text).into_iter().collect()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// The lines as a slice, ready to hand to the engine.
    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.lines
    }
}

impl Index<usize> for LineSequence {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.lines[index]
    }
}

impl From<Vec<String>> for LineSequence {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl<S: Into<String>> FromIterator<S> for LineSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl AsRef<[String]> for LineSequence {
    fn as_ref(&self) -> &[String] {
        &self.lines
    }
}

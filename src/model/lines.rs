//! Ordered display lines produced by the text formatter.

use serde::{Deserialize, Serialize};

/// The display-ready lines of a document.
///
/// An empty string is a blank-line marker used for vertical spacing. The
/// push methods never store two blank markers in a row and never store a
/// leading one; [`DocumentLines::finish`] drops the trailing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentLines {
    lines: Vec<String>,
}

impl DocumentLines {
    /// Create an empty line sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank-line marker unless the sequence is empty or already
    /// ends with one.
    pub fn push_blank(&mut self) {
        if matches!(self.lines.last(), Some(last) if !last.is_empty()) {
            self.lines.push(String::new());
        }
    }

    /// Append a line. Empty lines go through [`push_blank`](Self::push_blank).
    pub fn push_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        if line.is_empty() {
            self.push_blank();
        } else {
            self.lines.push(line);
        }
    }

    /// Append every line from an iterator.
    pub fn extend_lines<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        for line in lines {
            self.push_line(line);
        }
    }

    /// Strip trailing blank markers and return the finished sequence.
    pub fn finish(mut self) -> Self {
        while matches!(self.lines.last(), Some(last) if last.is_empty()) {
            self.lines.pop();
        }
        self
    }

    /// Number of lines, blank markers included.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether there are no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Borrow the lines as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    /// Iterate over the lines in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }

    /// Consume the sequence and return the owned lines.
    pub fn into_vec(self) -> Vec<String> {
        self.lines
    }

    /// Plain text of the document, one line per row.
    pub fn plain_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl<'a> IntoIterator for &'a DocumentLines {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

//! Page-level types.

/// A single output page: a contiguous slice of the document lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    /// Page number (1-indexed)
    pub number: usize,

    /// Lines shown on the page, top to bottom
    pub lines: &'a [String],
}

impl<'a> Page<'a> {
    /// Create a page over a slice of lines.
    pub fn new(number: usize, lines: &'a [String]) -> Self {
        Self { number, lines }
    }

    /// Number of lines on the page, blank markers included.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the page has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

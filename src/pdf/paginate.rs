//! Splitting document lines into pages.

use crate::model::Page;

/// Split `lines` into contiguous pages of at most `max_lines` lines.
///
/// Order is preserved and only the last page may be short. No lines means
/// no pages. A `max_lines` of zero is treated as one.
pub fn paginate(lines: &[String], max_lines: usize) -> Vec<Page<'_>> {
    lines
        .chunks(max_lines.max(1))
        .enumerate()
        .map(|(index, chunk)| Page::new(index + 1, chunk))
        .collect()
}

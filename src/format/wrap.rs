//! Greedy word wrapping with separate first-line and continuation indents.

use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

/// Wrap `text` into lines no wider than `width` columns.
///
/// The first line starts with `initial_indent`, the rest with
/// `subsequent_indent`; both count toward the width. Lines break on spaces
/// and after hyphens. A single word wider than the available space is kept
/// whole on its own line. Whitespace-only text yields no lines.
pub fn wrap_text(
    text: &str,
    width: usize,
    initial_indent: &str,
    subsequent_indent: &str,
) -> Vec<String> {
    let normalized: String = text
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    if normalized.is_empty() {
        return Vec::new();
    }

    let options = Options::new(width)
        .initial_indent(initial_indent)
        .subsequent_indent(subsequent_indent)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::HyphenSplitter)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    textwrap::wrap(&normalized, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

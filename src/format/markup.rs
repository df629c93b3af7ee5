//! Splitting and classification of source markup lines.

/// Characters that end a source line. `\r\n` counts as a single break.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0B}', '\u{0C}', '\u{1C}', '\u{1D}', '\u{1E}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

/// Whether `c` ends a source line.
pub fn is_line_break(c: char) -> bool {
    LINE_BREAKS.contains(&c)
}

/// Split markup into source lines at every line-break character.
///
/// A final break does not start an extra empty line, so `"a\n"` yields just
/// `"a"` while `"\n"` yields one empty line.
pub fn source_lines(text: &str) -> SourceLines<'_> {
    SourceLines { rest: text }
}

/// Iterator returned by [`source_lines`].
#[derive(Debug, Clone)]
pub struct SourceLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let rest = self.rest;
        match rest.char_indices().find(|(_, c)| is_line_break(*c)) {
            Some((pos, c)) => {
                let mut next = pos + c.len_utf8();
                if c == '\r' && rest[next..].starts_with('\n') {
                    next += 1;
                }
                self.rest = &rest[next..];
                Some(&rest[..pos])
            }
            None => {
                self.rest = "";
                Some(rest)
            }
        }
    }
}

/// One source line, classified by its leading marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupLine<'a> {
    /// Empty or whitespace-only line
    Blank,
    /// `#`, `##` or `###` heading with the marker removed
    Heading { level: u8, text: &'a str },
    /// `- ` bullet item with the marker removed
    Bullet(&'a str),
    /// Line fully wrapped in `*`, with the asterisks removed
    Emphasis(&'a str),
    /// Anything else
    Paragraph(&'a str),
}

impl<'a> MarkupLine<'a> {
    /// Classify a raw source line. Surrounding whitespace is ignored.
    pub fn classify(raw: &'a str) -> Self {
        let line = raw.trim();
        if line.is_empty() {
            return MarkupLine::Blank;
        }

        if let Some(text) = line.strip_prefix("# ") {
            MarkupLine::Heading { level: 1, text }
        } else if let Some(text) = line.strip_prefix("## ") {
            MarkupLine::Heading { level: 2, text }
        } else if let Some(text) = line.strip_prefix("### ") {
            MarkupLine::Heading { level: 3, text }
        } else if let Some(text) = line.strip_prefix("- ") {
            MarkupLine::Bullet(text)
        } else if line.starts_with('*') && line.ends_with('*') {
            MarkupLine::Emphasis(line.trim_matches('*'))
        } else {
            MarkupLine::Paragraph(line)
        }
    }

    /// Whether this is a heading of any level.
    pub fn is_heading(&self) -> bool {
        matches!(self, MarkupLine::Heading { .. })
    }
}

//! Text formatter: converts flat Markdown into wrapped, sanitized display lines.
//!
//! Supported structure is deliberately flat: `#`/`##`/`###` headings, `- `
//! bullets, lines fully wrapped in `*`, and plain paragraphs. Each source
//! line is handled on its own; there is no nesting or multi-line syntax.
//! Lines end at `\n`, `\r\n`, a lone `\r`, vertical tab, form feed, the
//! file/group/record separators, NEL, and U+2028/U+2029.

mod markup;
mod options;
mod sanitize;
mod wrap;

pub use markup::{is_line_break, source_lines, MarkupLine, SourceLines};
pub use options::{FormatOptions, DEFAULT_WRAP_WIDTH};
pub use sanitize::{replacement_for, sanitize_text, Sanitizer, REPLACEMENTS};
pub use wrap::wrap_text;

use crate::model::DocumentLines;

/// Converts markup text into [`DocumentLines`].
pub struct TextFormatter {
    options: FormatOptions,
    sanitizer: Sanitizer,
}

impl TextFormatter {
    /// Create a formatter with the given options.
    pub fn new(options: FormatOptions) -> Self {
        let sanitizer = Sanitizer::new(options.normalize_unicode);
        Self { options, sanitizer }
    }

    /// The options this formatter was built with.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Format a whole markup document, one [`source_lines`] entry at a time.
    pub fn format(&self, markup: &str) -> DocumentLines {
        let mut lines = DocumentLines::new();

        for raw in source_lines(markup) {
            match MarkupLine::classify(raw) {
                MarkupLine::Blank => lines.push_blank(),
                MarkupLine::Heading { level: 1 | 2, text } => {
                    let title = self.sanitizer.sanitize(text).to_uppercase();
                    lines.push_blank();
                    lines.extend_lines(self.wrap(&title, "", ""));
                    lines.push_blank();
                }
                MarkupLine::Heading { text, .. } => {
                    let title = self.sanitizer.sanitize(text);
                    lines.push_blank();
                    lines.extend_lines(self.wrap(&title, "", ""));
                }
                MarkupLine::Bullet(text) => {
                    let item = self.sanitizer.sanitize(text);
                    lines.extend_lines(self.wrap(
                        &item,
                        &self.options.bullet_prefix,
                        &self.options.bullet_indent,
                    ));
                }
                MarkupLine::Emphasis(text) | MarkupLine::Paragraph(text) => {
                    let body = self.sanitizer.sanitize(text);
                    lines.extend_lines(self.wrap(&body, "", ""));
                }
            }
        }

        let lines = lines.finish();
        log::debug!("Formatted markup into {} lines", lines.len());
        lines
    }

    fn wrap(&self, text: &str, initial: &str, subsequent: &str) -> Vec<String> {
        wrap_text(text, self.options.wrap_width, initial, subsequent)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}

/// Format markup with the default options.
pub fn format_markdown(markup: &str) -> DocumentLines {
    TextFormatter::default().format(markup)
}

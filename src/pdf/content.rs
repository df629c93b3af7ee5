//! Page content streams.

use super::layout::PageLayout;
use super::FONT_RESOURCE;

/// Escape the characters that are reserved inside a PDF literal string.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '(' | ')') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build the text operators that draw `lines` top to bottom.
///
/// Blank lines only advance the cursor. Operators are joined by `\n`
/// without a trailing newline.
pub fn build_content_stream(lines: &[String], layout: &PageLayout) -> String {
    let mut commands = vec![
        "BT".to_string(),
        format!("/{} {} Tf", FONT_RESOURCE, layout.font_size),
        format!("{} TL", layout.line_height),
        format!("{} {} Td", layout.margin_x, layout.text_top()),
    ];

    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            commands.push("T*".to_string());
        }
        if !line.is_empty() {
            commands.push(format!("({}) Tj", escape_text(line)));
        }
    }

    commands.push("ET".to_string());
    commands.join("\n")
}

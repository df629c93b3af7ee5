//! Character sanitization applied to every non-blank source line.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Typographic characters replaced by ASCII-safe equivalents.
pub const REPLACEMENTS: &[(char, &str)] = &[
    ('\u{2013}', "-"),   // en dash
    ('\u{2014}', "-"),   // em dash
    ('\u{2022}', "-"),   // bullet
    ('\u{00B7}', "-"),   // middle dot
    ('\u{2019}', "'"),   // right single quote
    ('\u{2018}', "'"),   // left single quote
    ('\u{201C}', "\""),  // left double quote
    ('\u{201D}', "\""),  // right double quote
    ('\u{2122}', "TM"),  // trade mark
    ('\u{00AE}', "(R)"), // registered
    ('\u{00A0}', " "),   // no-break space
    ('\u{2082}', "2"),   // subscript two
];

/// Look up the replacement for a single character.
pub fn replacement_for(c: char) -> Option<&'static str> {
    REPLACEMENTS
        .iter()
        .find(|(src, _)| *src == c)
        .map(|(_, dst)| *dst)
}

/// Sanitizes markup text into plain, mostly Latin-1 text.
pub struct Sanitizer {
    normalize_unicode: bool,
    bold_asterisk: Regex,
    bold_underscore: Regex,
}

impl Sanitizer {
    /// Create a sanitizer. With `normalize_unicode`, input is NFC-composed
    /// before the replacement table runs.
    pub fn new(normalize_unicode: bool) -> Self {
        Self {
            normalize_unicode,
            bold_asterisk: Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern compiles"),
            bold_underscore: Regex::new(r"__(.*?)__").expect("bold pattern compiles"),
        }
    }

    /// Sanitize one line of text.
    pub fn sanitize(&self, text: &str) -> String {
        let composed: String = if self.normalize_unicode {
            text.nfc().collect()
        } else {
            text.to_string()
        };

        let mut result = String::with_capacity(composed.len());
        for c in composed.chars() {
            match replacement_for(c) {
                Some(dst) => result.push_str(dst),
                None => result.push(c),
            }
        }

        let result = self.bold_asterisk.replace_all(&result, "${1}");
        let mut result = self
            .bold_underscore
            .replace_all(&result, "${1}")
            .into_owned();

        result.retain(|c| c != '*' && c != '`');
        result
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Sanitize text with the default sanitizer.
pub fn sanitize_text(text: &str) -> String {
    Sanitizer::default().sanitize(text)
}

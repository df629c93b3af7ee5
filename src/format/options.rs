//! Formatting options and configuration.

/// Default maximum line width in characters.
pub const DEFAULT_WRAP_WIDTH: usize = 88;

/// Options for turning markup into display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum characters per line, indents included
    pub wrap_width: usize,

    /// Compose decomposed Unicode (NFC) before sanitizing
    pub normalize_unicode: bool,

    /// Prefix of the first line of a bullet item
    pub bullet_prefix: String,

    /// Indent of continuation lines of a bullet item
    pub bullet_indent: String,
}

impl FormatOptions {
    /// Create new format options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wrap width.
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Set the bullet prefix and continuation indent.
    pub fn with_bullet(mut self, prefix: impl Into<String>, indent: impl Into<String>) -> Self {
        self.bullet_prefix = prefix.into();
        self.bullet_indent = indent.into();
        self
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            normalize_unicode: true,
            bullet_prefix: "  - ".to_string(),
            bullet_indent: "    ".to_string(),
        }
    }
}

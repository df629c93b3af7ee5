//! Page geometry and typography.

use crate::error::{Error, Result};

/// Fixed page layout in PDF points (1 point = 1/72 inch).
///
/// Dimensions are whole points so the emitted operators are stable
/// integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    /// Page width
    pub page_width: u32,

    /// Page height
    pub page_height: u32,

    /// Left margin, where every line starts
    pub margin_x: u32,

    /// Top margin; also used as the bottom margin for pagination
    pub margin_top: u32,

    /// Font size
    pub font_size: u32,

    /// Distance between baselines
    pub line_height: u32,

    /// Standard Type1 font shown on every page
    pub base_font: String,
}

impl PageLayout {
    /// Create a US Letter layout with the default typography.
    pub fn new() -> Self {
        Self::default()
    }

    /// US Letter (8.5 x 11 inches).
    pub fn letter() -> Self {
        Self::default()
    }

    /// A4 (210 x 297 mm), rounded to whole points.
    pub fn a4() -> Self {
        Self::default().with_page_size(595, 842)
    }

    /// Set the page size.
    pub fn with_page_size(mut self, width: u32, height: u32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set both margins.
    pub fn with_margins(mut self, margin_x: u32, margin_top: u32) -> Self {
        self.margin_x = margin_x;
        self.margin_top = margin_top;
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the line height.
    pub fn with_line_height(mut self, height: u32) -> Self {
        self.line_height = height;
        self
    }

    /// Set the base font name (one of the standard 14 fonts).
    pub fn with_base_font(mut self, font: impl Into<String>) -> Self {
        self.base_font = font.into();
        self
    }

    /// Vertical space available for text.
    pub fn usable_height(&self) -> u32 {
        self.page_height.saturating_sub(self.margin_top.saturating_mul(2))
    }

    /// How many lines fit on one page; never less than one.
    pub fn max_lines_per_page(&self) -> usize {
        if self.line_height == 0 {
            return 1;
        }
        ((self.usable_height() / self.line_height) as usize).max(1)
    }

    /// Baseline of the first line, measured from the bottom edge.
    pub fn text_top(&self) -> u32 {
        self.page_height.saturating_sub(self.margin_top)
    }

    /// Reject layouts that cannot produce a page.
    pub fn validate(&self) -> Result<()> {
        if self.page_width == 0 || self.page_height == 0 {
            return Err(Error::InvalidLayout(format!(
                "page size must be positive, got {}x{}",
                self.page_width, self.page_height
            )));
        }
        if self.margin_top.saturating_mul(2) >= self.page_height {
            return Err(Error::InvalidLayout(format!(
                "top and bottom margins of {} leave no room on a page {} high",
                self.margin_top, self.page_height
            )));
        }
        if self.margin_x >= self.page_width {
            return Err(Error::InvalidLayout(format!(
                "left margin {} does not fit a page {} wide",
                self.margin_x, self.page_width
            )));
        }
        if self.line_height == 0 {
            return Err(Error::InvalidLayout("line height must be positive".into()));
        }
        if self.font_size == 0 {
            return Err(Error::InvalidLayout("font size must be positive".into()));
        }
        if self.base_font.is_empty() || self.base_font.contains(char::is_whitespace) {
            return Err(Error::InvalidLayout(format!(
                "invalid base font name {:?}",
                self.base_font
            )));
        }
        Ok(())
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_width: 612,
            page_height: 792,
            margin_x: 48,
            margin_top: 48,
            font_size: 11,
            line_height: 13,
            base_font: "Helvetica".to_string(),
        }
    }
}

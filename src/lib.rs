//! # mdpdf
//!
//! Minimal Markdown to PDF conversion for text-extraction-friendly output.
//!
//! This library turns a flat Markdown document (headings, bullets, emphasis
//! lines and paragraphs) into a small, uncompressed PDF 1.4 file that uses a
//! single built-in font. The output is easy for applicant tracking systems
//! and other text extractors to read.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdpdf::{convert_file, ConvertOptions};
//!
//! fn main() -> mdpdf::Result<()> {
//!     let report = convert_file("resume.md", "out/resume.pdf", &ConvertOptions::default())?;
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Text formatter** ([`format`]): markup to sanitized, wrapped lines
//! - **Document assembler** ([`pdf`]): lines to pages to a byte-exact PDF
//! - **Inspector** ([`inspect`]): read back and verify a produced file

pub mod convert;
pub mod error;
pub mod format;
pub mod inspect;
pub mod model;
pub mod pdf;

// Re-export commonly used types
pub use convert::{
    convert_file, convert_str, format_file, ConvertOptions, ConvertReport, ConvertResult,
};
pub use error::{Error, Result};
pub use format::{format_markdown, sanitize_text, FormatOptions, TextFormatter};
pub use inspect::{inspect_bytes, inspect_file, is_pdf_bytes, PdfSummary};
pub use model::{DocumentLines, Page};
pub use pdf::{assemble, paginate, AssembledPdf, PageLayout};

use std::path::Path;

/// Convert Markdown text to PDF bytes with default options.
///
/// # Example
///
/// ```
/// let pdf = mdpdf::to_pdf("# Hello\n\nWorld").unwrap();
/// assert!(pdf.starts_with(b"%PDF-1.4"));
/// ```
pub fn to_pdf(markup: &str) -> Result<Vec<u8>> {
    Ok(convert_str(markup, &ConvertOptions::default())?.into_bytes())
}

/// Builder for converting Markdown documents.
///
/// # Example
///
/// ```no_run
/// use mdpdf::{Mdpdf, PageLayout};
///
/// let report = Mdpdf::new()
///     .with_wrap_width(80)
///     .with_layout(PageLayout::a4())
///     .convert_file("resume.md", "resume.pdf")?;
/// println!("{} page(s)", report.page_count);
/// # Ok::<(), mdpdf::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mdpdf {
    options: ConvertOptions,
}

impl Mdpdf {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wrap width in characters.
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.options = self.options.with_wrap_width(width);
        self
    }

    /// Set the page layout.
    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.options = self.options.with_layout(layout);
        self
    }

    /// Set the formatting options.
    pub fn with_format_options(mut self, options: FormatOptions) -> Self {
        self.options = self.options.with_format_options(options);
        self
    }

    /// Disable NFC normalization before sanitizing.
    pub fn without_unicode_normalization(mut self) -> Self {
        self.options.format = self.options.format.with_unicode_normalization(false);
        self
    }

    /// The options collected so far.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Format markup into display lines without building a PDF.
    pub fn format(&self, markup: &str) -> DocumentLines {
        TextFormatter::new(self.options.format.clone()).format(markup)
    }

    /// Convert markup text in memory.
    pub fn convert_str(&self, markup: &str) -> Result<ConvertResult> {
        convert_str(markup, &self.options)
    }

    /// Convert a markup file and write the PDF.
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<ConvertReport> {
        convert_file(input, output, &self.options)
    }
}

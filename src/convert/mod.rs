//! End-to-end conversion from a markup source to a PDF file.
//!
//! Conversion always builds the complete file in memory before anything is
//! written, so a failed run leaves no partial output behind.
//!
//! # Example
//!
//! ```no_run
//! use mdpdf::convert::{convert_file, ConvertOptions};
//!
//! fn main() -> mdpdf::Result<()> {
//!     let report = convert_file(
//!         "content/resume/resume.md",
//!         "static/resume/resume.pdf",
//!         &ConvertOptions::default(),
//!     )?;
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::format::{FormatOptions, TextFormatter};
use crate::model::DocumentLines;
use crate::pdf::{assemble, paginate, AssembledPdf, PageLayout};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Options for document conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Markup formatting options
    pub format: FormatOptions,

    /// Page geometry and typography
    pub layout: PageLayout,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set formatting options.
    pub fn with_format_options(mut self, options: FormatOptions) -> Self {
        self.format = options;
        self
    }

    /// Set the page layout.
    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the wrap width.
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.format = self.format.with_wrap_width(width);
        self
    }

    /// Check that the options can produce a document.
    pub fn validate(&self) -> Result<()> {
        if self.format.wrap_width == 0 {
            return Err(Error::InvalidLayout("wrap width must be positive".into()));
        }
        self.layout.validate()
    }
}

/// Result of converting markup in memory.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Formatted display lines
    pub lines: DocumentLines,

    /// The assembled PDF
    pub pdf: AssembledPdf,
}

impl ConvertResult {
    /// PDF file content.
    pub fn bytes(&self) -> &[u8] {
        &self.pdf.bytes
    }

    /// Consume the result and return the PDF file content.
    pub fn into_bytes(self) -> Vec<u8> {
        self.pdf.bytes
    }

    /// Number of pages written.
    pub fn page_count(&self) -> usize {
        self.pdf.page_count
    }

    /// Characters dropped during encoding.
    pub fn dropped_chars(&self) -> usize {
        self.pdf.dropped_chars
    }
}

/// Summary of a conversion written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertReport {
    /// Path of the written PDF
    pub output: PathBuf,

    /// Size of the written file in bytes
    pub byte_size: usize,

    /// Number of pages
    pub page_count: usize,

    /// Number of formatted lines, blank markers included
    pub line_count: usize,

    /// Characters dropped during encoding
    pub dropped_chars: usize,
}

impl fmt::Display for ConvertReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated {} ({} bytes, {} page(s))",
            self.output.display(),
            self.byte_size,
            self.page_count
        )
    }
}

/// Convert markup text to PDF bytes.
///
/// Fails with [`Error::EmptyDocument`] when the markup has no displayable
/// lines.
pub fn convert_str(markup: &str, options: &ConvertOptions) -> Result<ConvertResult> {
    options.validate()?;

    let formatter = TextFormatter::new(options.format.clone());
    let lines = formatter.format(markup);
    if lines.is_empty() {
        return Err(Error::EmptyDocument);
    }

    let max_lines = options.layout.max_lines_per_page();
    let pages = paginate(lines.as_slice(), max_lines);
    log::debug!(
        "Paginated {} lines into {} page(s) of at most {}",
        lines.len(),
        pages.len(),
        max_lines
    );

    let pdf = assemble(&pages, &options.layout)?;
    Ok(ConvertResult { lines, pdf })
}

/// Read the markup file at `input` and write the PDF to `output`.
///
/// Missing input fails with [`Error::SourceNotFound`] before anything is
/// created. Parent directories of `output` are created as needed and the
/// file is written in a single call.
pub fn convert_file<P, Q>(input: P, output: Q, options: &ConvertOptions) -> Result<ConvertReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    let markup = read_source(input)?;
    let result = convert_str(&markup, options)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, result.bytes())?;

    Ok(ConvertReport {
        output: output.to_path_buf(),
        byte_size: result.bytes().len(),
        page_count: result.page_count(),
        line_count: result.lines.len(),
        dropped_chars: result.dropped_chars(),
    })
}

/// Format the markup file at `input` without producing a PDF.
pub fn format_file<P: AsRef<Path>>(input: P, options: &FormatOptions) -> Result<DocumentLines> {
    let markup = read_source(input.as_ref())?;
    Ok(TextFormatter::new(options.clone()).format(&markup))
}

fn read_source(input: &Path) -> Result<String> {
    match fs::read_to_string(input) {
        Ok(markup) => Ok(markup),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(Error::SourceNotFound(input.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

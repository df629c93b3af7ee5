//! Structural checks for PDF files produced by this crate.
//!
//! The inspector reads back the header, the `startxref` pointer, the
//! cross-reference table and the trailer, and verifies that every in-use
//! xref entry points at its own `N 0 obj` token. It understands the classic
//! uncompressed layout written by [`crate::pdf::assemble`], not arbitrary PDFs.

use crate::error::{Error, Result};
use regex::bytes::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.4"
const XREF_ENTRY_LEN: usize = 20;

static TRAILER_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"trailer\s*<<[^>]*/Size\s+(\d+)").expect("trailer pattern compiles")
});

static PAGE_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/Type\s*/Pages\b[^>]*?/Count\s+(\d+)").expect("page tree pattern compiles")
});

/// Structural summary of a PDF file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfSummary {
    /// PDF version from the header (e.g., "1.4")
    pub version: String,

    /// Number of in-use objects in the cross-reference table
    pub object_count: usize,

    /// Page count declared by the page tree
    pub page_count: usize,

    /// Byte offset of the cross-reference section
    pub xref_offset: usize,

    /// Total file size in bytes
    pub byte_size: usize,
}

/// Inspect a PDF file on disk.
pub fn inspect_file<P: AsRef<Path>>(path: P) -> Result<PdfSummary> {
    let data = fs::read(path)?;
    inspect_bytes(&data)
}

/// Inspect PDF bytes.
pub fn inspect_bytes(data: &[u8]) -> Result<PdfSummary> {
    let version = header_version(data)?;

    let body = data.trim_ascii_end();
    if !body.ends_with(b"%%EOF") {
        return Err(malformed("missing %%EOF marker"));
    }

    let xref_offset = find_startxref(body)?;
    let xref = data
        .get(xref_offset..)
        .filter(|rest| rest.starts_with(b"xref\n"))
        .ok_or_else(|| malformed(format!("startxref {} does not point at xref", xref_offset)))?;
    let size = parse_subsection_size(xref)?;
    verify_entries(data, xref, size)?;

    let trailer_size = capture_number(&TRAILER_SIZE_RE, &data[xref_offset..])
        .ok_or_else(|| malformed("trailer has no /Size"))?;
    if trailer_size != size {
        return Err(malformed(format!(
            "trailer /Size {} disagrees with xref size {}",
            trailer_size, size
        )));
    }

    let page_count = capture_number(&PAGE_COUNT_RE, data)
        .ok_or_else(|| malformed("page tree has no /Count"))?;

    Ok(PdfSummary {
        version,
        object_count: size - 1,
        page_count,
        xref_offset,
        byte_size: data.len(),
    })
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    header_version(data).is_ok()
}

fn header_version(data: &[u8]) -> Result<String> {
    if data.len() < PDF_MAGIC.len() + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(malformed("missing %PDF- header"));
    }
    let version_bytes = &data[PDF_MAGIC.len()..PDF_MAGIC.len() + VERSION_LEN];
    match version_bytes {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => {
            Ok(String::from_utf8_lossy(version_bytes).into_owned())
        }
        _ => Err(malformed(format!(
            "invalid version {:?}",
            String::from_utf8_lossy(version_bytes)
        ))),
    }
}

fn find_startxref(body: &[u8]) -> Result<usize> {
    const KEYWORD: &[u8] = b"startxref";
    let pos = body
        .windows(KEYWORD.len())
        .rposition(|w| w == KEYWORD)
        .ok_or_else(|| malformed("missing startxref"))?;
    let digits = body[pos + KEYWORD.len()..].trim_ascii_start();
    parse_leading_number(digits).ok_or_else(|| malformed("startxref has no offset"))
}

/// Parse the `0 <size>` subsection header that follows the `xref` keyword.
fn parse_subsection_size(xref: &[u8]) -> Result<usize> {
    let header = xref
        .split(|b| *b == b'\n')
        .nth(1)
        .ok_or_else(|| malformed("truncated xref"))?;
    let header = std::str::from_utf8(header).map_err(|_| malformed("xref header is not ASCII"))?;
    match header.trim().split_once(' ') {
        Some(("0", size)) => size
            .parse::<usize>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| malformed(format!("invalid xref size {:?}", size))),
        _ => Err(malformed(format!("unsupported xref subsection {:?}", header))),
    }
}

fn verify_entries(data: &[u8], xref: &[u8], size: usize) -> Result<()> {
    // Skip the `xref` keyword line and the subsection header line.
    let mut lines = xref.splitn(3, |b| *b == b'\n');
    let entries = match (lines.next(), lines.next(), lines.next()) {
        (Some(_), Some(_), Some(rest)) => rest,
        _ => return Err(malformed("truncated xref")),
    };
    let table_len = size
        .checked_mul(XREF_ENTRY_LEN)
        .ok_or_else(|| malformed(format!("xref size {} too large", size)))?;
    if entries.len() < table_len {
        return Err(malformed("xref table shorter than declared"));
    }

    for (number, entry) in entries.chunks(XREF_ENTRY_LEN).take(size).enumerate() {
        let kind = entry[17];
        if number == 0 {
            if kind != b'f' {
                return Err(malformed("object 0 is not the free-list head"));
            }
            continue;
        }
        if kind != b'n' {
            return Err(malformed(format!("object {} is not in use", number)));
        }
        let offset = parse_leading_number(&entry[..10])
            .ok_or_else(|| malformed(format!("bad offset for object {}", number)))?;
        let token = format!("{} 0 obj", number);
        if !data
            .get(offset..)
            .is_some_and(|rest| rest.starts_with(token.as_bytes()))
        {
            return Err(malformed(format!(
                "object {} is not at offset {}",
                number, offset
            )));
        }
    }
    Ok(())
}

fn parse_leading_number(bytes: &[u8]) -> Option<usize> {
    let end = bytes
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(bytes.len());
    std::str::from_utf8(&bytes[..end]).ok()?.parse().ok()
}

fn capture_number(re: &Regex, haystack: &[u8]) -> Option<usize> {
    let digits = re.captures(haystack)?.get(1)?;
    parse_leading_number(digits.as_bytes())
}

fn malformed(message: impl Into<String>) -> Error {
    Error::Inspect(message.into())
}

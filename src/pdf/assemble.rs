//! Building the object graph for a paginated document.

use super::content::build_content_stream;
use super::encoding::encode_latin1;
use super::layout::PageLayout;
use super::objects::{ObjectId, ObjectTable};
use super::{CATALOG_ID, FONT_RESOURCE, PAGES_ID};
use crate::error::{Error, Result};
use crate::model::Page;

/// A finished PDF file held in memory.
#[derive(Debug, Clone)]
pub struct AssembledPdf {
    /// Complete file content
    pub bytes: Vec<u8>,

    /// Number of pages written
    pub page_count: usize,

    /// Number of objects, excluding the free-list head
    pub object_count: usize,

    /// Byte offset of each object, index 0 holding object 1
    pub offsets: Vec<usize>,

    /// Byte offset of the cross-reference section
    pub xref_offset: usize,

    /// Characters dropped because they have no Latin-1 byte
    pub dropped_chars: usize,
}

impl AssembledPdf {
    /// Size of the file in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file has no content. Never true for an assembled file.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Serialize pages into a complete PDF.
///
/// Object 1 is the catalog and object 2 the page tree. Each page adds its
/// content stream followed by its page object, and one shared font object
/// comes last.
pub fn assemble(pages: &[Page<'_>], layout: &PageLayout) -> Result<AssembledPdf> {
    if pages.is_empty() {
        return Err(Error::EmptyDocument);
    }
    layout.validate()?;

    let mut table = ObjectTable::new();
    let catalog_id = table.reserve();
    let pages_id = table.reserve();
    debug_assert_eq!((catalog_id, pages_id), (CATALOG_ID, PAGES_ID));

    let mut dropped_chars = 0;
    let mut page_refs: Vec<(ObjectId, ObjectId)> = Vec::with_capacity(pages.len());
    for page in pages {
        let stream = encode_latin1(&build_content_stream(page.lines, layout));
        dropped_chars += stream.dropped;

        let mut body = format!("<< /Length {} >>\nstream\n", stream.bytes.len()).into_bytes();
        body.extend_from_slice(&stream.bytes);
        body.extend_from_slice(b"\nendstream");

        let content_id = table.add(body);
        let page_id = table.reserve();
        page_refs.push((page_id, content_id));
    }

    let font_id = table.add(format!(
        "<< /Type /Font /Subtype /Type1 /BaseFont /{} >>",
        layout.base_font
    ));

    for &(page_id, content_id) in &page_refs {
        table.fill(
            page_id,
            format!(
                "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << /{} {} 0 R >> >> /Contents {} 0 R >>",
                pages_id,
                layout.page_width,
                layout.page_height,
                FONT_RESOURCE,
                font_id,
                content_id
            ),
        )?;
    }

    let kids = page_refs
        .iter()
        .map(|(page_id, _)| format!("{} 0 R", page_id))
        .collect::<Vec<_>>()
        .join(" ");
    table.fill(
        pages_id,
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids,
            page_refs.len()
        ),
    )?;

    table.fill(
        catalog_id,
        format!("<< /Type /Catalog /Pages {} 0 R >>", pages_id),
    )?;

    let object_count = table.len();
    let serialized = table.serialize(catalog_id)?;

    if dropped_chars > 0 {
        log::warn!(
            "Dropped {} character(s) with no Latin-1 representation",
            dropped_chars
        );
    }
    log::debug!(
        "Assembled {} page(s), {} objects, {} bytes",
        pages.len(),
        object_count,
        serialized.bytes.len()
    );

    Ok(AssembledPdf {
        bytes: serialized.bytes,
        page_count: pages.len(),
        object_count,
        offsets: serialized.offsets,
        xref_offset: serialized.xref_offset,
        dropped_chars,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::paginate;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_single_page_object_graph() {
        let lines = owned(&["TITLE", "", "Body"]);
        let pages = paginate(&lines, 53);
        let pdf = assemble(&pages, &PageLayout::default()).unwrap();
        let text = String::from_utf8_lossy(&pdf.bytes).into_owned();

        assert_eq!(pdf.page_count, 1);
        assert_eq!(pdf.object_count, 5);
        assert!(text.contains("1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n"));
        assert!(text.contains("2 0 obj\n<< /Type /Pages /Kids [4 0 R] /Count 1 >>\nendobj\n"));
        assert!(text.contains(
            "4 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 3 0 R >>\nendobj\n"
        ));
        assert!(text.contains(
            "5 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n"
        ));
        assert!(text.contains("trailer << /Size 6 /Root 1 0 R >>"));
    }

    #[test]
    fn test_stream_length_matches_bytes() {
        let lines = owned(&["Caf\u{00E9} (latin-1)"]);
        let pages = paginate(&lines, 53);
        let pdf = assemble(&pages, &PageLayout::default()).unwrap();

        let start = pdf.offsets[2];
        let object = &pdf.bytes[start..pdf.offsets[3]];
        let header = b"3 0 obj\n<< /Length ";
        assert!(object.starts_with(header));
        let rest = &object[header.len()..];
        let digits: String = rest
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .map(|b| *b as char)
            .collect();
        let length: usize = digits.parse().unwrap();

        let stream_start = header.len() + digits.len() + " >>\nstream\n".len();
        let stream = &object[stream_start..stream_start + length];
        assert!(stream.starts_with(b"BT\n"));
        assert!(stream.ends_with(b"ET"));
        assert!(object[stream_start + length..].starts_with(b"\nendstream\nendobj\n"));
    }

    #[test]
    fn test_multi_page_numbering() {
        let lines: Vec<String> = (0..5).map(|i| format!("row {}", i)).collect();
        let pages = paginate(&lines, 2);
        let pdf = assemble(&pages, &PageLayout::default()).unwrap();
        let text = String::from_utf8_lossy(&pdf.bytes).into_owned();

        assert_eq!(pdf.page_count, 3);
        assert_eq!(pdf.object_count, 2 + 3 * 2 + 1);
        assert!(text.contains("/Kids [4 0 R 6 0 R 8 0 R] /Count 3"));
        assert!(text.contains("/Contents 7 0 R"));
        assert!(text.contains("/F1 9 0 R"));
    }

    #[test]
    fn test_dropped_characters_counted() {
        let lines = owned(&["price \u{20AC}5 \u{4E2D}"]);
        let pages = paginate(&lines, 53);
        let pdf = assemble(&pages, &PageLayout::default()).unwrap();
        assert_eq!(pdf.dropped_chars, 2);
        let text = String::from_utf8_lossy(&pdf.bytes).into_owned();
        assert!(text.contains("(price 5 ) Tj"));
    }

    #[test]
    fn test_no_pages_rejected() {
        let result = assemble(&[], &PageLayout::default());
        assert!(matches!(result, Err(Error::EmptyDocument)));
    }
}

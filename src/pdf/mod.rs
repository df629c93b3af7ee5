//! Document assembler: paginates display lines and writes a minimal PDF.
//!
//! The output is a PDF 1.4 file with no compression and a single standard
//! Type1 font, laid out as catalog, page tree, one content stream and page
//! object per page, then the font. Every byte offset in the cross-reference
//! table is taken from the buffer as it is written.

mod assemble;
mod content;
mod encoding;
mod layout;
mod objects;
mod paginate;

pub use assemble::{assemble, AssembledPdf};
pub use content::{build_content_stream, escape_text};
pub use encoding::{encode_latin1, Latin1};
pub use layout::PageLayout;
pub use objects::{ObjectId, ObjectTable, SerializedPdf, PDF_HEADER};
pub use paginate::paginate;

/// Object number of the document catalog.
pub const CATALOG_ID: ObjectId = 1;

/// Object number of the page tree.
pub const PAGES_ID: ObjectId = 2;

/// Resource name of the shared font inside page resources.
pub const FONT_RESOURCE: &str = "F1";

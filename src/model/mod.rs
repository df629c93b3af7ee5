//! Document model types shared by the formatter and the PDF assembler.
//!
//! The formatter produces [`DocumentLines`]; the assembler slices them into
//! [`Page`]s. Both are plain data with no knowledge of the PDF syntax.

mod lines;
mod page;

pub use lines::DocumentLines;
pub use page::Page;

//! Error types for mdpdf library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The markup source file does not exist.
    #[error("Source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Formatting the source produced no displayable lines.
    #[error("Source document is empty")]
    EmptyDocument,

    /// An object was still pending when the file was serialized.
    #[error("Object {0} was not initialized")]
    UninitializedObject(u32),

    /// An object number was filled without being reserved first.
    #[error("Object {0} was never reserved")]
    UnknownObject(u32),

    /// Page geometry or wrap settings cannot produce any output.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// A PDF handed to the inspector is malformed.
    #[error("PDF inspection error: {0}")]
    Inspect(String),
}

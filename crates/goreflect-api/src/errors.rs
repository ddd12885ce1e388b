use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an extraction
///
/// No partial [`Document`](crate::Document) is produced when one of these is
/// returned. Per-declaration problems are reported as
/// [`Diagnostic`](crate::Diagnostic)s instead.
#[derive(Error, Debug)]
pub enum ParserError {
    /// Failed to open or read the source file
    #[error("Cannot read source {0}: {1}")]
    SourceUnreadable(PathBuf, #[source] std::io::Error),

    /// The grammar rejected the input
    #[error("Syntax error in {0}:{1}:{2}: {3}")]
    SyntaxError(PathBuf, usize, usize, String),

    /// File too large
    #[error("File {0} exceeds maximum size ({1} bytes)")]
    FileTooLarge(PathBuf, usize),

    /// The grammar could not be loaded or produced no tree
    #[error("Parse error in {0}: {1}")]
    ParseError(PathBuf, String),
}

/// Result type for parser operations
pub type ParserResult<T> = Result<T, ParserError>;

/// Errors raised while writing a document out
#[derive(Error, Debug)]
pub enum ExportError {
    /// Failed to create or write the output file
    #[error("IO error writing {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    /// The document could not be encoded
    #[error("Failed to serialize {0}: {1}")]
    Serialization(PathBuf, #[source] serde_json::Error),

    /// The document has no package name to derive a file name from
    #[error("Document has no package name")]
    MissingPackageName,
}

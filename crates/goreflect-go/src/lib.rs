//! # goreflect-go
//!
//! Go extractor for goreflect - reads one Go source file and produces its
//! package name and docs, type declarations with their methods, and
//! top-level functions, each with verbatim source text.
//!
//! ## Features
//!
//! - Parse Go source files with tree-sitter
//! - Doc comments associated the way Go tooling associates them
//! - Methods bound to their receiver type regardless of declaration order
//! - Non-fatal diagnostics for declarations that cannot be represented
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use goreflect_go::GoExtractor;
//! use goreflect_api::{export, SourceExtractor};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = GoExtractor::new();
//!
//! let extraction = extractor.extract_file(Path::new("main.go"))?;
//! for diagnostic in &extraction.diagnostics {
//!     eprintln!("warning: {}", diagnostic);
//! }
//! export::dump_json(&extraction.document, Path::new("."))?;
//! # Ok(())
//! # }
//! ```

mod comments;
mod extractor;
mod header;
mod parser_impl;
mod registry;
mod source;
mod visitor;

// Re-export API types for convenience
pub use goreflect_api::{
    Diagnostic, Document, Extraction, ExtractorConfig, ExtractorMetrics, FuncDecl, ParserError,
    SourceExtractor, TypeDecl,
};

// Export the Go extractor implementation
pub use parser_impl::GoExtractor;
pub use registry::receiver_type_name;
pub use source::{SourceBuffer, SpanError};

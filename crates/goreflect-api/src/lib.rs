//! goreflect API
//!
//! Shared types and trait for goreflect source extractors.
//!
//! An extractor reads one source file and produces a [`Document`]: the package
//! name and docs, every type declaration with its methods, and every top-level
//! function, each with its verbatim source text. This crate defines:
//!
//! - **Document model**: [`Document`], [`TypeDecl`], [`FuncDecl`]
//! - **SourceExtractor trait**: The interface language extractors implement
//! - **Diagnostics**: Non-fatal, per-declaration failures
//! - **Configuration**: Customizable extractor behavior
//! - **Metrics**: Performance and success tracking
//! - **Export**: JSON serialization of documents
//!
//! # Example
//!
//! ```rust
//! use goreflect_api::{export, Document, FuncDecl, TypeDecl};
//!
//! let mut doc = Document::new("demo");
//! doc.types.insert(
//!     "Buz".to_string(),
//!     TypeDecl::new("Buz", "type Buz struct{}")
//!         .with_method("meth", FuncDecl::new("func (b *Buz) meth() {}")),
//! );
//!
//! let json = export::export_json(&doc).unwrap();
//! assert!(json.contains("\"packageName\": \"demo\""));
//! ```

pub mod config;
pub mod diagnostics;
pub mod document;
pub mod entities;
pub mod errors;
pub mod export;
pub mod metrics;
pub mod traits;


// Re-export commonly used types
pub use config::{DuplicatePolicy, ExtractorConfig};
pub use diagnostics::{DeclKind, Diagnostic, DiagnosticKind};
pub use document::{Document, Extraction};
pub use entities::{FuncDecl, TypeDecl};
pub use errors::{ExportError, ParserError, ParserResult};
pub use metrics::ExtractorMetrics;
pub use traits::{BatchReport, SourceExtractor};

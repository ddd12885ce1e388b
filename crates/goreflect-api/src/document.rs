use crate::{
    diagnostics::Diagnostic,
    entities::{FuncDecl, TypeDecl},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Structural metadata extracted from one source file
///
/// This is the value handed to downstream tooling. It is assembled once per
/// parse and never mutated by the extractor afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Identifier following the `package` keyword
    pub package_name: String,

    /// Comment block immediately preceding the package clause
    pub package_docs: String,

    /// Type declarations keyed by name, each owning its methods
    pub types: BTreeMap<String, TypeDecl>,

    /// Functions without a receiver, keyed by name
    pub top_level_funcs: BTreeMap<String, FuncDecl>,
}

impl Document {
    /// Create an empty document for a package
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            ..Default::default()
        }
    }

    pub fn with_package_docs(mut self, docs: impl Into<String>) -> Self {
        self.package_docs = docs.into();
        self
    }

    pub fn type_decl(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name)
    }

    pub fn function(&self, name: &str) -> Option<&FuncDecl> {
        self.top_level_funcs.get(name)
    }

    /// Look up a method by receiver type and method name
    pub fn method(&self, receiver: &str, name: &str) -> Option<&FuncDecl> {
        self.types.get(receiver).and_then(|t| t.methods.get(name))
    }

    /// Total number of methods across all types
    pub fn method_count(&self) -> usize {
        self.types.values().map(|t| t.methods.len()).sum()
    }

    /// Total number of declarations (types, functions and methods)
    pub fn declaration_count(&self) -> usize {
        self.types.len() + self.top_level_funcs.len() + self.method_count()
    }
}

/// Result of a successful extraction: the document plus any declarations
/// that had to be omitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    pub fn new(document: Document, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            document,
            diagnostics,
        }
    }

    /// True when every declaration made it into the document
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

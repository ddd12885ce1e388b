//! Non-fatal, per-declaration extraction failures.
//!
//! A diagnostic means one declaration was left out of the [`Document`](crate::Document);
//! the rest of the file was still extracted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of declaration a diagnostic refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    Type,
    Function,
    Method,
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclKind::Type => write!(f, "type"),
            DeclKind::Function => write!(f, "function"),
            DeclKind::Method => write!(f, "method"),
        }
    }
}

/// What went wrong with a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DiagnosticKind {
    /// A byte range reported by the parser could not be read from the source
    SpanRead {
        start: usize,
        end: usize,
        source_len: usize,
    },

    /// A method's receiver type is not declared in this file
    UnresolvedReceiver { receiver: String },

    /// A declaration with this name was already registered in the same scope
    DuplicateDeclaration { first_line: usize },
}

/// A declaration that was omitted (or, for duplicates under the
/// last-wins policy, replaced) during extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Declared name (`Receiver.method` for methods)
    pub name: String,

    pub decl_kind: DeclKind,

    /// 1-based line of the declaration
    pub line: usize,

    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn span_read(
        name: impl Into<String>,
        decl_kind: DeclKind,
        line: usize,
        start: usize,
        end: usize,
        source_len: usize,
    ) -> Self {
        Self {
            name: name.into(),
            decl_kind,
            line,
            kind: DiagnosticKind::SpanRead {
                start,
                end,
                source_len,
            },
        }
    }

    pub fn unresolved_receiver(
        name: impl Into<String>,
        line: usize,
        receiver: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            decl_kind: DeclKind::Method,
            line,
            kind: DiagnosticKind::UnresolvedReceiver {
                receiver: receiver.into(),
            },
        }
    }

    pub fn duplicate(
        name: impl Into<String>,
        decl_kind: DeclKind,
        line: usize,
        first_line: usize,
    ) -> Self {
        Self {
            name: name.into(),
            decl_kind,
            line,
            kind: DiagnosticKind::DuplicateDeclaration { first_line },
        }
    }

    pub fn is_unresolved_receiver(&self) -> bool {
        matches!(self.kind, DiagnosticKind::UnresolvedReceiver { .. })
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self.kind, DiagnosticKind::DuplicateDeclaration { .. })
    }

    pub fn is_span_read(&self) -> bool {
        matches!(self.kind, DiagnosticKind::SpanRead { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::SpanRead {
                start,
                end,
                source_len,
            } => write!(
                f,
                "line {}: {} {}: cannot read bytes {}..{} of {}-byte source",
                self.line, self.decl_kind, self.name, start, end, source_len
            ),
            DiagnosticKind::UnresolvedReceiver { receiver } => write!(
                f,
                "line {}: method {}: receiver type '{}' is not declared in this file",
                self.line, self.name, receiver
            ),
            DiagnosticKind::DuplicateDeclaration { first_line } => write!(
                f,
                "line {}: {} {} already declared at line {}",
                self.line, self.decl_kind, self.name, first_line
            ),
        }
    }
}

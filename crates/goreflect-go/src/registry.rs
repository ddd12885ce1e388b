//! Type and function registries
//!
//! Types are registered first, then functions and methods, so a method can
//! be bound to its receiver no matter where the receiver type is declared in
//! the file.

use goreflect_api::{
    DeclKind, Diagnostic, DuplicatePolicy, ExtractorConfig, FuncDecl, TypeDecl,
};
use log::{trace, warn};
use std::collections::{hash_map::Entry, BTreeMap, HashMap};
use tree_sitter::Node;

use crate::comments::CommentIndex;
use crate::source::{SourceBuffer, SpanError};
use crate::visitor::TypeSite;

/// Completed registries and the diagnostics collected while filling them
pub struct Registered {
    pub types: BTreeMap<String, TypeDecl>,
    pub top_level_funcs: BTreeMap<String, FuncDecl>,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct Registry<'a> {
    source: SourceBuffer<'a>,
    comments: &'a CommentIndex,
    config: &'a ExtractorConfig,
    types: BTreeMap<String, TypeDecl>,
    top_level_funcs: BTreeMap<String, FuncDecl>,
    first_lines: HashMap<(DeclKind, String), usize>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Registry<'a> {
    pub fn new(
        source: SourceBuffer<'a>,
        comments: &'a CommentIndex,
        config: &'a ExtractorConfig,
    ) -> Self {
        Self {
            source,
            comments,
            config,
            types: BTreeMap::new(),
            top_level_funcs: BTreeMap::new(),
            first_lines: HashMap::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Register a type declaration with an empty method set
    pub fn register_type(&mut self, site: &TypeSite) {
        let spec = site.spec;
        let line = line_of(spec);
        let Some(name_node) = spec.child_by_field_name("name") else {
            return;
        };
        let name = match self.source.node_text(name_node) {
            Ok(name) => name.to_string(),
            Err(e) => return self.span_failure("<type>", DeclKind::Type, line, e),
        };
        if name == "_" {
            return;
        }

        let end = spec
            .child_by_field_name("type")
            .map_or(spec.end_byte(), |t| t.end_byte());
        let body = match self.source.span(name_node.start_byte(), end) {
            Ok(text) => format!("type {}", text),
            Err(e) => return self.span_failure(&name, DeclKind::Type, line, e),
        };

        // A spec's own comment wins over the comment on its `type` keyword.
        let docs = self
            .doc_at(spec.start_byte())
            .or_else(|| self.doc_at(site.declaration.start_byte()))
            .unwrap_or_default();

        if self.admit(DeclKind::Type, &name, line) {
            trace!("type {} (line {})", name, line);
            let decl = TypeDecl::new(name.clone(), body).with_docs(docs);
            self.types.insert(name, decl);
        }
    }

    /// Register a `function_declaration` or `method_declaration`
    pub fn register_function(&mut self, node: Node) {
        let line = line_of(node);
        let Some(name_node) = node.child_by_field_name("name") else {
            return;
        };
        let name = match self.source.node_text(name_node) {
            Ok(name) => name.to_string(),
            Err(e) => return self.span_failure("<func>", DeclKind::Function, line, e),
        };
        if name == "_" {
            return;
        }

        match node.child_by_field_name("receiver") {
            None => {
                let Some(func) = self.func_decl(node, &name, DeclKind::Function) else {
                    return;
                };
                if self.admit(DeclKind::Function, &name, line) {
                    trace!("func {} (line {})", name, line);
                    self.top_level_funcs.insert(name, func);
                }
            }
            Some(receiver) => self.register_method(node, receiver, name),
        }
    }

    fn register_method(&mut self, node: Node, receiver: Node, name: String) {
        let line = line_of(node);
        let receiver_text = match receiver_type_node(receiver).map(|t| self.source.node_text(t)) {
            Some(Ok(text)) => text,
            Some(Err(e)) => return self.span_failure(&name, DeclKind::Method, line, e),
            None => {
                let diag = Diagnostic::unresolved_receiver(name, line, "");
                warn!("{}", diag);
                self.diagnostics.push(diag);
                return;
            }
        };
        let receiver_name = receiver_type_name(receiver_text).to_string();
        let qualified = format!("{}.{}", receiver_name, name);

        let Some(func) = self.func_decl(node, &qualified, DeclKind::Method) else {
            return;
        };

        if !self.types.contains_key(&receiver_name) {
            let diag = Diagnostic::unresolved_receiver(qualified, line, receiver_name);
            warn!("{}", diag);
            self.diagnostics.push(diag);
            return;
        }

        if self.admit(DeclKind::Method, &qualified, line) {
            trace!("method {} (line {})", qualified, line);
            if let Some(owner) = self.types.get_mut(&receiver_name) {
                owner.methods.insert(name, func);
            }
        }
    }

    pub fn finish(self) -> Registered {
        Registered {
            types: self.types,
            top_level_funcs: self.top_level_funcs,
            diagnostics: self.diagnostics,
        }
    }

    /// Doc and verbatim text of a function, from `func` to the end of its body
    fn func_decl(&mut self, node: Node, name: &str, kind: DeclKind) -> Option<FuncDecl> {
        let end = node
            .child_by_field_name("body")
            .map_or(node.end_byte(), |b| b.end_byte());

        match self.source.span(node.start_byte(), end) {
            Ok(body) => {
                let doc = self.doc_at(node.start_byte()).unwrap_or_default();
                Some(FuncDecl::new(body).with_doc(doc))
            }
            Err(e) => {
                self.span_failure(name, kind, line_of(node), e);
                None
            }
        }
    }

    fn doc_at(&self, offset: usize) -> Option<String> {
        if !self.config.include_docs {
            return None;
        }
        self.comments.doc_text(offset, self.source.text())
    }

    /// Claim `name` for a declaration at `line`. Returns whether the
    /// declaration should be stored.
    fn admit(&mut self, kind: DeclKind, name: &str, line: usize) -> bool {
        match self.first_lines.entry((kind, name.to_string())) {
            Entry::Vacant(slot) => {
                slot.insert(line);
                true
            }
            Entry::Occupied(first) => {
                let diag = Diagnostic::duplicate(name, kind, line, *first.get());
                warn!("{}", diag);
                self.diagnostics.push(diag);
                self.config.duplicate_policy == DuplicatePolicy::LastWins
            }
        }
    }

    fn span_failure(&mut self, name: &str, kind: DeclKind, line: usize, err: SpanError) {
        let diag = Diagnostic::span_read(name, kind, line, err.start, err.end, err.len);
        warn!("{}", diag);
        self.diagnostics.push(diag);
    }
}

fn line_of(node: Node) -> usize {
    node.start_position().row + 1
}

/// Type node of the first parameter in a receiver list
fn receiver_type_node(receiver: Node) -> Option<Node> {
    let mut cursor = receiver.walk();
    let param = receiver
        .named_children(&mut cursor)
        .find(|child| child.kind() == "parameter_declaration")?;
    param.child_by_field_name("type")
}

/// Bare type name of a receiver: one leading `*`, enclosing parentheses and
/// any type arguments are removed (`*Buz`, `(*Buz)` and `Buz[T]` all give `Buz`)
pub fn receiver_type_name(text: &str) -> &str {
    let text = unparenthesize(text);
    let text = unparenthesize(text.strip_prefix('*').unwrap_or(text));
    match text.find('[') {
        Some(i) => text[..i].trim_end(),
        None => text,
    }
}

fn unparenthesize(mut text: &str) -> &str {
    loop {
        text = text.trim();
        match text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
            Some(inner) => text = inner,
            None => return text,
        }
    }
}

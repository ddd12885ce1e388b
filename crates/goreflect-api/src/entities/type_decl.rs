use super::FuncDecl;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named type declaration together with the methods bound to it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Declared type name
    pub name: String,

    /// Doc comment text (empty if absent)
    pub docs: String,

    /// Verbatim declaration text, prefixed with `type `
    pub body: String,

    /// Methods keyed by method name
    pub methods: BTreeMap<String, FuncDecl>,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: String::new(),
            body: body.into(),
            methods: BTreeMap::new(),
        }
    }

    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = docs.into();
        self
    }

    pub fn with_method(mut self, name: impl Into<String>, method: FuncDecl) -> Self {
        self.methods.insert(name.into(), method);
        self
    }

    pub fn method(&self, name: &str) -> Option<&FuncDecl> {
        self.methods.get(name)
    }
}

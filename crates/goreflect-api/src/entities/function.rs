use serde::{Deserialize, Serialize};

/// A function or method declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncDecl {
    /// Leading doc comment text (empty if absent)
    pub doc: String,

    /// Verbatim source from the `func` keyword through the end of the body
    pub body: String,
}

impl FuncDecl {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            doc: String::new(),
            body: body.into(),
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    /// Does this declaration carry a doc comment?
    pub fn has_doc(&self) -> bool {
        !self.doc.is_empty()
    }
}

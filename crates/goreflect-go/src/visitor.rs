//! Syntax tree visitor classifying Go declarations

use log::trace;
use tree_sitter::Node;

/// One `type_spec` or `type_alias` together with the `type` declaration that
/// introduces it
#[derive(Debug, Clone, Copy)]
pub struct TypeSite<'tree> {
    pub spec: Node<'tree>,
    pub declaration: Node<'tree>,
}

/// Collects declarations in source order without interpreting them
///
/// By default only direct children of the file root are considered. With
/// `capture_nested` the whole tree is walked, which also finds type
/// declarations inside function bodies.
pub struct GoVisitor<'tree> {
    capture_nested: bool,
    pub types: Vec<TypeSite<'tree>>,
    /// Function and method declarations, interleaved in source order
    pub functions: Vec<Node<'tree>>,
}

impl<'tree> GoVisitor<'tree> {
    pub fn new(capture_nested: bool) -> Self {
        Self {
            capture_nested,
            types: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn visit_root(&mut self, root: Node<'tree>) {
        if self.capture_nested {
            self.visit_node(root);
            return;
        }

        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            self.classify(child);
        }
    }

    fn visit_node(&mut self, node: Node<'tree>) {
        self.classify(node);

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit_node(child);
        }
    }

    fn classify(&mut self, node: Node<'tree>) {
        match node.kind() {
            "function_declaration" | "method_declaration" => {
                trace!("{} at line {}", node.kind(), node.start_position().row + 1);
                self.functions.push(node);
            }
            "type_declaration" => self.visit_type_declaration(node),
            _ => {}
        }
    }

    fn visit_type_declaration(&mut self, node: Node<'tree>) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if matches!(child.kind(), "type_spec" | "type_alias") {
                trace!("{} at line {}", child.kind(), child.start_position().row + 1);
                self.types.push(TypeSite {
                    spec: child,
                    declaration: node,
                });
            }
        }
    }
}

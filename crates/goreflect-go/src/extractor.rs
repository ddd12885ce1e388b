//! Document extraction for Go source code

use goreflect_api::{Document, Extraction, ExtractorConfig, ParserError};
use log::debug;
use std::path::Path;
use tree_sitter::{Node, Parser};

use crate::comments::CommentIndex;
use crate::header::extract_header;
use crate::registry::Registry;
use crate::source::SourceBuffer;
use crate::visitor::GoVisitor;

/// Extract the document of one Go source file
pub fn extract(
    source: &str,
    file_path: &Path,
    config: &ExtractorConfig,
) -> Result<Extraction, ParserError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::language())
        .map_err(|e| ParserError::ParseError(file_path.to_path_buf(), e.to_string()))?;

    let tree = parser.parse(source, None).ok_or_else(|| {
        ParserError::ParseError(file_path.to_path_buf(), "Failed to parse".to_string())
    })?;

    let root_node = tree.root_node();
    if root_node.has_error() {
        return Err(syntax_error(root_node, source, file_path));
    }

    let buffer = SourceBuffer::new(source);
    let comments = CommentIndex::build(root_node, source);
    let header = extract_header(root_node, &buffer, &comments, file_path)?;

    let mut visitor = GoVisitor::new(config.capture_nested);
    visitor.visit_root(root_node);

    let mut registry = Registry::new(buffer, &comments, config);
    for site in &visitor.types {
        registry.register_type(site);
    }
    for node in &visitor.functions {
        registry.register_function(*node);
    }
    let registered = registry.finish();

    let document = Document {
        package_name: header.package_name,
        package_docs: if config.include_docs {
            header.package_docs
        } else {
            String::new()
        },
        types: registered.types,
        top_level_funcs: registered.top_level_funcs,
    };

    debug!(
        "extracted package {} from {}: {} types, {} functions, {} methods, {} diagnostics",
        document.package_name,
        file_path.display(),
        document.types.len(),
        document.top_level_funcs.len(),
        document.method_count(),
        registered.diagnostics.len()
    );

    Ok(Extraction::new(document, registered.diagnostics))
}

/// Syntax error pointing at the first error or missing node
fn syntax_error(root: Node, source: &str, file_path: &Path) -> ParserError {
    let Some(node) = first_error(root) else {
        return ParserError::SyntaxError(file_path.to_path_buf(), 0, 0, "Syntax error".to_string());
    };

    let position = node.start_position();
    let message = if node.is_missing() {
        format!("missing {}", node.kind())
    } else {
        let snippet = source
            .get(node.byte_range())
            .and_then(|text| text.lines().next())
            .unwrap_or("")
            .trim();
        if snippet.is_empty() {
            "unexpected input".to_string()
        } else {
            format!("unexpected '{}'", truncate(snippet, 40))
        }
    };

    ParserError::SyntaxError(
        file_path.to_path_buf(),
        position.row + 1,
        position.column + 1,
        message,
    )
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error() || child.is_missing())
        .find_map(first_error)
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_has_position() {
        let source = "package demo\n\nfunc broken( {\n";
        let err = extract(source, Path::new("broken.go"), &ExtractorConfig::default()).unwrap_err();

        match err {
            ParserError::SyntaxError(path, line, column, _) => {
                assert_eq!(path, Path::new("broken.go"));
                assert!(line >= 3);
                assert!(column >= 1);
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("ab", 3), "ab");
        assert_eq!(truncate("héllo", 2), "hé");
    }
}

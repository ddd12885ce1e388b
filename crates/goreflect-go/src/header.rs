//! Package clause extraction

use goreflect_api::ParserError;
use std::path::Path;
use tree_sitter::Node;

use crate::comments::CommentIndex;
use crate::source::SourceBuffer;

/// Package name and package documentation of one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub package_name: String,
    pub package_docs: String,
}

/// Read the package clause from the file root
///
/// A file without a package clause is not a valid Go file and is reported as
/// a syntax error.
pub fn extract_header(
    root: Node,
    source: &SourceBuffer,
    comments: &CommentIndex,
    file_path: &Path,
) -> Result<Header, ParserError> {
    let mut cursor = root.walk();
    let clause = root
        .children(&mut cursor)
        .find(|child| child.kind() == "package_clause")
        .ok_or_else(|| {
            ParserError::SyntaxError(
                file_path.to_path_buf(),
                1,
                1,
                "expected 'package' clause".to_string(),
            )
        })?;

    let mut clause_cursor = clause.walk();
    let name_node = clause
        .named_children(&mut clause_cursor)
        .find(|child| child.kind() == "package_identifier")
        .ok_or_else(|| {
            ParserError::SyntaxError(
                file_path.to_path_buf(),
                clause.start_position().row + 1,
                clause.start_position().column + 1,
                "expected package name".to_string(),
            )
        })?;

    let package_name = source
        .node_text(name_node)
        .map_err(|e| ParserError::ParseError(file_path.to_path_buf(), e.to_string()))?
        .to_string();

    let package_docs = comments
        .doc_text(clause.start_byte(), source.text())
        .unwrap_or_default();

    Ok(Header {
        package_name,
        package_docs,
    })
}

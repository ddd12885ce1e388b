//! Comment grouping and doc comment association.
//!
//! tree-sitter-go reports every comment as a `comment` node wherever it falls
//! in the tree. Go attaches documentation differently: adjacent comments form
//! a group, and the group ending on the line right before a token (with no
//! blank line in between) is that token's lead comment. Comments that start
//! on the same line as code are line comments and never document anything.

use std::ops::Range;
use tree_sitter::Node;

/// A run of adjacent comments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentGroup {
    comments: Vec<Range<usize>>,
    trailing: bool,
}

impl CommentGroup {
    fn new(first: Range<usize>, trailing: bool) -> Self {
        Self {
            comments: vec![first],
            trailing,
        }
    }

    pub fn end(&self) -> usize {
        self.comments.last().map_or(0, |c| c.end)
    }

    /// True when the group starts after code on the same line
    #[cfg(test)]
    pub fn is_trailing(&self) -> bool {
        self.trailing
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Comment text with markers removed
    ///
    /// `//` loses the marker and one following space, `/* */` loses its
    /// delimiters. Trailing whitespace is trimmed per line, leading and
    /// trailing blank lines are dropped, runs of blank lines collapse into
    /// one, and tool directives such as `//go:generate` are skipped. A
    /// non-empty result always ends with a newline.
    pub fn text(&self, source: &str) -> String {
        let mut lines: Vec<&str> = Vec::new();
        for range in &self.comments {
            let Some(raw) = source.get(range.clone()) else {
                continue;
            };
            if let Some(line) = raw.strip_prefix("//") {
                if is_directive(line) {
                    continue;
                }
                lines.push(line.strip_prefix(' ').unwrap_or(line));
            } else if let Some(block) = raw.strip_prefix("/*") {
                let block = block.strip_suffix("*/").unwrap_or(block);
                lines.extend(block.split('\n'));
            }
        }

        let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
        for line in lines.into_iter().map(str::trim_end) {
            if line.is_empty() && kept.last().map_or(true, |prev| prev.is_empty()) {
                continue;
            }
            kept.push(line);
        }
        while kept.last() == Some(&"") {
            kept.pop();
        }

        if kept.is_empty() {
            return String::new();
        }
        let mut text = kept.join("\n");
        text.push('\n');
        text
    }
}

/// `//line`, `//extern`, `//export` and `//tool:directive` comments
fn is_directive(after_marker: &str) -> bool {
    if after_marker.starts_with("line ")
        || after_marker.starts_with("extern ")
        || after_marker.starts_with("export ")
    {
        return true;
    }

    let bytes = after_marker.as_bytes();
    let colon = match after_marker.find(':') {
        Some(i) if i > 0 && i + 1 < bytes.len() => i,
        _ => return false,
    };
    bytes[..=colon + 1]
        .iter()
        .enumerate()
        .all(|(i, b)| i == colon || b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// All comment groups of one file, in source order
#[derive(Debug, Default)]
pub struct CommentIndex {
    groups: Vec<CommentGroup>,
}

impl CommentIndex {
    pub fn build(root: Node, source: &str) -> Self {
        let mut ranges = Vec::new();
        collect_comments(root, &mut ranges);
        ranges.sort_by_key(|r| r.start);
        Self::from_ranges(ranges, source)
    }

    fn from_ranges(ranges: Vec<Range<usize>>, source: &str) -> Self {
        let mut groups: Vec<CommentGroup> = Vec::new();

        for range in ranges {
            let joins = groups
                .last()
                .map_or(false, |group| continues_group(group, &range, source));

            match groups.last_mut() {
                Some(group) if joins => group.comments.push(range),
                _ => {
                    let trailing = follows_code_on_line(source, range.start);
                    groups.push(CommentGroup::new(range, trailing));
                }
            }
        }

        Self { groups }
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[CommentGroup] {
        &self.groups
    }

    /// The comment group documenting the token that starts at `offset`
    pub fn lead_group(&self, offset: usize, source: &str) -> Option<&CommentGroup> {
        let before = self.groups.partition_point(|g| g.end() <= offset);
        let group = self.groups.get(before.checked_sub(1)?)?;
        if group.trailing {
            return None;
        }

        let gap = source.get(group.end()..offset)?;
        let adjacent = gap.chars().all(char::is_whitespace) && gap.matches('\n').count() == 1;
        adjacent.then_some(group)
    }

    /// Rendered doc text for the token at `offset`, if it has any
    pub fn doc_text(&self, offset: usize, source: &str) -> Option<String> {
        self.lead_group(offset, source)
            .map(|g| g.text(source))
            .filter(|text| !text.is_empty())
    }
}

fn collect_comments(node: Node, out: &mut Vec<Range<usize>>) {
    if node.kind() == "comment" {
        out.push(node.byte_range());
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_comments(child, out);
    }
}

// Line comments only absorb comments on their own line; lead candidates
// absorb comments on the next line too.
fn continues_group(group: &CommentGroup, next: &Range<usize>, source: &str) -> bool {
    let Some(gap) = source.get(group.end()..next.start) else {
        return false;
    };
    if !gap.chars().all(char::is_whitespace) {
        return false;
    }

    let newlines = gap.matches('\n').count();
    if group.trailing {
        newlines == 0
    } else {
        newlines <= 1
    }
}

fn follows_code_on_line(source: &str, offset: usize) -> bool {
    let Some(before) = source.get(..offset) else {
        return false;
    };
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    !before[line_start..].trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn with_index<F: FnOnce(&CommentIndex)>(source: &str, check: F) {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::language()).unwrap();
        let tree = parser.parse(source, None).unwrap();
        let index = CommentIndex::build(tree.root_node(), source);
        check(&index);
    }

    fn doc_before(index: &CommentIndex, source: &str, needle: &str) -> Option<String> {
        let offset = source.find(needle).unwrap();
        index.doc_text(offset, source)
    }

    #[test]
    fn test_adjacent_line_comments_form_one_group() {
        let source = "// one\n// two\npackage demo\n";
        with_index(source, |index| {
            assert_eq!(index.groups().len(), 1);
            assert_eq!(index.groups()[0].len(), 2);
            assert_eq!(doc_before(index, source, "package").as_deref(), Some("one\ntwo\n"));
        });
    }

    #[test]
    fn test_blank_line_splits_groups_and_breaks_association() {
        let source = "// license\n\n// docs\npackage demo\n\n// orphan\n\nfunc foo() {}\n";
        with_index(source, |index| {
            assert_eq!(index.groups().len(), 3);
            assert_eq!(doc_before(index, source, "package").as_deref(), Some("docs\n"));
            assert_eq!(doc_before(index, source, "func foo"), None);
        });
    }

    #[test]
    fn test_trailing_comment_is_not_a_doc_comment() {
        let source = "package demo\n\nvar x = 1 // about x\nfunc foo() {}\n";
        with_index(source, |index| {
            assert!(index.groups()[0].is_trailing());
            assert_eq!(doc_before(index, source, "func foo"), None);
        });
    }

    #[test]
    fn test_comment_on_same_line_as_declaration_is_not_a_doc_comment() {
        let source = "package demo\n\n/* inline */ func foo() {}\n";
        with_index(source, |index| {
            assert_eq!(doc_before(index, source, "func foo"), None);
        });
    }

    #[test]
    fn test_block_comment_text() {
        let source = "package demo\n\n/*\n  Block docs\n  second line\n*/\nfunc foo() {}\n";
        with_index(source, |index| {
            assert_eq!(
                doc_before(index, source, "func foo").as_deref(),
                Some("  Block docs\n  second line\n")
            );
        });
    }

    #[test]
    fn test_only_one_space_is_stripped() {
        let source = "package demo\n\n//   indented\n//no space\nfunc foo() {}\n";
        with_index(source, |index| {
            assert_eq!(
                doc_before(index, source, "func foo").as_deref(),
                Some("  indented\nno space\n")
            );
        });
    }

    #[test]
    fn test_blank_comment_lines_are_trimmed_and_collapsed() {
        let source = "package demo\n\n//\n// first\n//\n//\n// second\n//\nfunc foo() {}\n";
        with_index(source, |index| {
            assert_eq!(
                doc_before(index, source, "func foo").as_deref(),
                Some("first\n\nsecond\n")
            );
        });
    }

    #[test]
    fn test_directives_are_skipped() {
        let source = "package demo\n\n// Frob frobs.\n//go:noinline\nfunc Frob() {}\n";
        with_index(source, |index| {
            assert_eq!(doc_before(index, source, "func Frob").as_deref(), Some("Frob frobs.\n"));
        });
    }

    #[test]
    fn test_directive_only_group_has_no_doc() {
        let source = "package demo\n\n//go:generate stringer -type=Kind\nfunc foo() {}\n";
        with_index(source, |index| {
            assert!(index.lead_group(source.find("func").unwrap(), source).is_some());
            assert_eq!(doc_before(index, source, "func foo"), None);
        });
    }

    #[test]
    fn test_is_directive() {
        assert!(is_directive("go:embed file.txt"));
        assert!(is_directive("line main.go:10"));
        assert!(is_directive("export Foo"));
        assert!(!is_directive(" go:embed"));
        assert!(!is_directive("Note: this is prose"));
        assert!(!is_directive("TODO:"));
    }
}

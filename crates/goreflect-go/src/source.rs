//! Random-access view over the source text being extracted.
//!
//! The whole file is loaded before the tree is walked, so every span the
//! parser reports can be read back in any order.

use thiserror::Error;
use tree_sitter::Node;

/// A byte range that cannot be read back from the source
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot read bytes {start}..{end} of {len}-byte source")]
pub struct SpanError {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct SourceBuffer<'a> {
    text: &'a str,
}

impl<'a> SourceBuffer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Exact text of `[start, end)`, with no normalization
    ///
    /// Ranges past the end of the buffer, inverted ranges and ranges that
    /// split a UTF-8 sequence are errors rather than truncated results.
    pub fn span(&self, start: usize, end: usize) -> Result<&'a str, SpanError> {
        if start > end {
            return Err(self.span_error(start, end));
        }
        self.text
            .get(start..end)
            .ok_or_else(|| self.span_error(start, end))
    }

    pub fn node_text(&self, node: Node) -> Result<&'a str, SpanError> {
        self.span(node.start_byte(), node.end_byte())
    }

    fn span_error(&self, start: usize, end: usize) -> SpanError {
        SpanError {
            start,
            end,
            len: self.text.len(),
        }
    }
}

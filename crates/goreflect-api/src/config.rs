use serde::{Deserialize, Serialize};

/// What to do when two declarations register under the same name in the
/// same scope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the first declaration and report every later one
    #[default]
    Reject,

    /// Replace the earlier declaration; the replacement is still reported
    LastWins,
}

/// Configuration for extractor behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum file size to parse (in bytes)
    /// Files larger than this are rejected before reading
    pub max_file_size: usize,

    /// Include doc comments in the document
    pub include_docs: bool,

    /// Also capture declarations nested inside function bodies,
    /// not only direct children of the file root
    pub capture_nested: bool,

    /// Name-collision handling for types, functions and methods
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024, // 10 MB
            include_docs: true,
            capture_nested: false,
            duplicate_policy: DuplicatePolicy::Reject,
        }
    }
}

impl ExtractorConfig {
    /// Create config for fast extraction (no doc comments)
    pub fn fast() -> Self {
        Self {
            include_docs: false,
            ..Default::default()
        }
    }

    /// Create config that captures every declaration in the tree
    pub fn comprehensive() -> Self {
        Self {
            include_docs: true,
            capture_nested: true,
            duplicate_policy: DuplicatePolicy::LastWins,
            ..Default::default()
        }
    }

    /// Set maximum file size
    pub fn with_max_file_size(mut self, size: usize) -> Self {
        self.max_file_size = size;
        self
    }

    pub fn with_docs(mut self, include_docs: bool) -> Self {
        self.include_docs = include_docs;
        self
    }

    pub fn with_nested(mut self, capture_nested: bool) -> Self {
        self.capture_nested = capture_nested;
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

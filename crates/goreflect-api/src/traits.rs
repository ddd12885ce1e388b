use crate::{
    config::ExtractorConfig, document::Extraction, errors::ParserError,
    metrics::ExtractorMetrics,
};
use std::path::{Path, PathBuf};

/// Outcome of extracting a batch of independent files
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successfully extracted files, in input order
    pub files: Vec<(PathBuf, Extraction)>,

    /// Files that failed with a fatal error (path, error message)
    pub failed_files: Vec<(PathBuf, String)>,
}

impl BatchReport {
    /// Total number of files processed (success + failure)
    pub fn total_files(&self) -> usize {
        self.files.len() + self.failed_files.len()
    }

    /// Success rate (0.0 to 1.0)
    pub fn success_rate(&self) -> f64 {
        if self.total_files() == 0 {
            0.0
        } else {
            self.files.len() as f64 / self.total_files() as f64
        }
    }

    /// Number of non-fatal diagnostics across all successful files
    pub fn diagnostic_count(&self) -> usize {
        self.files.iter().map(|(_, e)| e.diagnostics.len()).sum()
    }
}

/// Core trait for extractors that turn one source file into a
/// [`Document`](crate::Document)
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so one extractor can be shared.
///
/// # Example
/// ```rust,ignore
/// use goreflect_api::{ExtractorConfig, SourceExtractor};
///
/// struct MyExtractor {
///     config: ExtractorConfig,
/// }
///
/// impl SourceExtractor for MyExtractor {
///     fn language(&self) -> &str {
///         "mylang"
///     }
///
///     fn file_extensions(&self) -> &[&str] {
///         &[".my"]
///     }
///
///     // ... implement other required methods
/// }
/// ```
pub trait SourceExtractor: Send + Sync {
    /// Returns the language identifier (lowercase, e.g., "go")
    fn language(&self) -> &str;

    /// Returns supported file extensions (e.g., [".go"])
    fn file_extensions(&self) -> &[&str];

    /// Read and extract a single file
    ///
    /// **Note on Metrics**: This method updates extractor metrics.
    ///
    /// # Errors
    /// Returns `ParserError` if:
    /// - The file cannot be read or is too large
    /// - The source has syntax errors
    fn extract_file(&self, path: &Path) -> Result<Extraction, ParserError>;

    /// Extract an in-memory source
    ///
    /// **Note on Metrics**: This method does NOT update extractor metrics, so
    /// that `extract_file()` calling it internally is not counted twice.
    ///
    /// # Arguments
    /// * `source` - Source code string
    /// * `file_path` - Logical path for this source (used in error messages)
    fn extract_source(&self, source: &str, file_path: &Path)
        -> Result<Extraction, ParserError>;

    /// Extract several files, each into its own document
    ///
    /// Default implementation runs sequentially and records fatal errors per
    /// file instead of stopping at the first one.
    fn extract_files(&self, paths: &[PathBuf]) -> BatchReport {
        let mut report = BatchReport::default();

        for path in paths {
            match self.extract_file(path) {
                Ok(extraction) => report.files.push((path.clone(), extraction)),
                Err(e) => report.failed_files.push((path.clone(), e.to_string())),
            }
        }

        report
    }

    /// Check if this extractor can handle the given file
    ///
    /// Default implementation checks file extension.
    fn can_parse(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension() {
            let ext_str = format!(".{}", ext.to_string_lossy());
            self.file_extensions().contains(&ext_str.as_str())
        } else {
            false
        }
    }

    /// Get extractor configuration
    fn config(&self) -> &ExtractorConfig;

    /// Get accumulated metrics
    fn metrics(&self) -> ExtractorMetrics;

    /// Reset metrics
    fn reset_metrics(&mut self);
}

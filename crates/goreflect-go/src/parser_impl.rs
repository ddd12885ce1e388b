//! Implementation of the SourceExtractor trait for Go

use goreflect_api::{
    Extraction, ExtractorConfig, ExtractorMetrics, ParserError, SourceExtractor,
};
use log::debug;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::extractor;

/// Go source extractor implementing the SourceExtractor trait
pub struct GoExtractor {
    config: ExtractorConfig,
    metrics: Mutex<ExtractorMetrics>,
}

impl GoExtractor {
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            config,
            metrics: Mutex::new(ExtractorMetrics::default()),
        }
    }

    fn update_metrics(&self, result: &Result<Extraction, ParserError>, duration: Duration) {
        let mut metrics = self.metrics.lock().unwrap_or_else(PoisonError::into_inner);
        metrics.files_attempted += 1;
        metrics.total_parse_time += duration;
        match result {
            Ok(extraction) => {
                metrics.files_succeeded += 1;
                metrics.total_declarations += extraction.document.declaration_count();
                metrics.total_diagnostics += extraction.diagnostics.len();
            }
            Err(_) => metrics.files_failed += 1,
        }
    }

    fn read_source(&self, path: &Path) -> Result<String, ParserError> {
        let metadata =
            fs::metadata(path).map_err(|e| ParserError::SourceUnreadable(path.to_path_buf(), e))?;

        if metadata.len() as usize > self.config.max_file_size {
            return Err(ParserError::FileTooLarge(
                path.to_path_buf(),
                metadata.len() as usize,
            ));
        }

        fs::read_to_string(path).map_err(|e| ParserError::SourceUnreadable(path.to_path_buf(), e))
    }
}

impl Default for GoExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceExtractor for GoExtractor {
    fn language(&self) -> &str {
        "go"
    }

    fn file_extensions(&self) -> &[&str] {
        &[".go"]
    }

    fn extract_file(&self, path: &Path) -> Result<Extraction, ParserError> {
        let start = Instant::now();
        let result = self
            .read_source(path)
            .and_then(|source| self.extract_source(&source, path));

        let duration = start.elapsed();
        debug!("{} took {:?}", path.display(), duration);
        self.update_metrics(&result, duration);

        result
    }

    fn extract_source(&self, source: &str, file_path: &Path) -> Result<Extraction, ParserError> {
        extractor::extract(source, file_path, &self.config)
    }

    fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    fn metrics(&self) -> ExtractorMetrics {
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn reset_metrics(&mut self) {
        *self.metrics.lock().unwrap_or_else(PoisonError::into_inner) = ExtractorMetrics::default();
    }
}

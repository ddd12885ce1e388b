use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Metrics collected during extraction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractorMetrics {
    /// Total files attempted
    pub files_attempted: usize,

    /// Files successfully extracted (possibly with diagnostics)
    pub files_succeeded: usize,

    /// Files that failed with a fatal error
    pub files_failed: usize,

    /// Total time spent extracting
    #[serde(with = "duration_serde")]
    pub total_parse_time: Duration,

    /// Total declarations registered (types, functions and methods)
    pub total_declarations: usize,

    /// Total non-fatal diagnostics reported
    pub total_diagnostics: usize,
}

// Helper module for serializing Duration
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis: u64 = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

impl ExtractorMetrics {
    /// Success rate (0.0 to 1.0)
    pub fn success_rate(&self) -> f64 {
        if self.files_attempted == 0 {
            0.0
        } else {
            self.files_succeeded as f64 / self.files_attempted as f64
        }
    }

    /// Average parse time per file
    pub fn avg_parse_time(&self) -> Duration {
        if self.files_succeeded == 0 {
            Duration::ZERO
        } else {
            self.total_parse_time / self.files_succeeded as u32
        }
    }

    /// Average declarations per file
    pub fn avg_declarations_per_file(&self) -> f64 {
        if self.files_succeeded == 0 {
            0.0
        } else {
            self.total_declarations as f64 / self.files_succeeded as f64
        }
    }

    /// Merge another metrics object into this one
    pub fn merge(&mut self, other: &ExtractorMetrics) {
        self.files_attempted += other.files_attempted;
        self.files_succeeded += other.files_succeeded;
        self.files_failed += other.files_failed;
        self.total_parse_time += other.total_parse_time;
        self.total_declarations += other.total_declarations;
        self.total_diagnostics += other.total_diagnostics;
    }
}

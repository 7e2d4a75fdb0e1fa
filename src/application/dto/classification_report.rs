//! Classification report DTO

use crate::domain::entities::{Detection, FileType};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome for a single path
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedFile {
    pub path: PathBuf,
    pub file_type: FileType,
    /// Matched signature, absent for unknown or unreadable files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection: Option<Detection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Set when the file could not be opened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClassifiedFile {
    pub fn identified(path: PathBuf, detection: Option<Detection>) -> Self {
        Self {
            path,
            file_type: detection
                .as_ref()
                .map_or(FileType::Unknown, Detection::file_type),
            detection,
            size: None,
            error: None,
        }
    }

    pub fn failed(path: PathBuf, error: String) -> Self {
        Self {
            path,
            file_type: FileType::Unknown,
            detection: None,
            size: None,
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Result of classifying a batch of files, in input order
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub files: Vec<ClassifiedFile>,
    #[serde(skip)]
    pub duration: Duration,
}

impl ClassificationReport {
    pub fn new(files: Vec<ClassifiedFile>, duration: Duration) -> Self {
        Self { files, duration }
    }

    /// Number of files per detected type, unknown included
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for file in self.files.iter().filter(|f| !f.is_error()) {
            *counts.entry(file.file_type.extension()).or_insert(0) += 1;
        }
        counts
    }

    pub fn error_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_error()).count()
    }

    pub fn identified_count(&self) -> usize {
        self.files.iter().filter(|f| f.file_type.is_known()).count()
    }

    /// Returns a summary string
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Classified {} files in {:.2}s: {} identified, {} unreadable\n",
            self.files.len(),
            self.duration.as_secs_f64(),
            self.identified_count(),
            self.error_count()
        );

        for (extension, count) in self.counts() {
            summary.push_str(&format!("  - {extension}: {count}\n"));
        }

        summary
    }
}

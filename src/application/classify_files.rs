//! Classify files use case
//!
//! Identifies the type of each path in a batch.

use crate::application::dto::{ClassificationReport, ClassifiedFile, ClassifyOptions};
use crate::domain::repositories::FileReader;
use crate::domain::services::FileTypeDetector;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Classify files use case
///
/// Files are independent of each other, so a batch can be spread over the
/// rayon pool. The report keeps the input order either way.
pub struct ClassifyFilesUseCase<R: FileReader> {
    detector: FileTypeDetector<R>,
}

impl<R: FileReader> ClassifyFilesUseCase<R> {
    pub fn new(detector: FileTypeDetector<R>) -> Self {
        Self { detector }
    }

    pub fn detector(&self) -> &FileTypeDetector<R> {
        &self.detector
    }

    /// Executes the classification
    pub fn execute(&self, paths: &[PathBuf], options: &ClassifyOptions) -> ClassificationReport {
        let start_time = Instant::now();

        tracing::info!(
            files = paths.len(),
            parallel = options.parallel,
            "Starting classification"
        );

        let files: Vec<ClassifiedFile> = if options.parallel {
            paths
                .par_iter()
                .map(|path| self.classify_one(path, options))
                .collect()
        } else {
            paths
                .iter()
                .map(|path| self.classify_one(path, options))
                .collect()
        };

        let report = ClassificationReport::new(files, start_time.elapsed());

        tracing::info!(
            identified = report.identified_count(),
            unreadable = report.error_count(),
            "Classification complete in {:.2}s",
            report.duration.as_secs_f64()
        );

        report
    }

    fn classify_one(&self, path: &Path, options: &ClassifyOptions) -> ClassifiedFile {
        let outcome = if options.file_types.is_empty() {
            self.detector.identify(path)
        } else {
            self.detector.identify_among(path, &options.file_types)
        };

        let mut file = match outcome {
            Ok(detection) => ClassifiedFile::identified(path.to_path_buf(), detection),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Could not classify file");
                return ClassifiedFile::failed(path.to_path_buf(), err.to_string());
            }
        };

        if options.include_size {
            match self.detector.reader().file_size(path) {
                Ok(size) => file.size = Some(size),
                Err(err) => {
                    tracing::debug!(path = %path.display(), error = %err, "Size unavailable")
                }
            }
        }

        file
    }
}

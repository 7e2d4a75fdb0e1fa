//! File type detector service
//!
//! Identifies a file by reading the prefix each candidate signature needs
//! and matching it against the signature table.

use crate::domain::entities::{Detection, FileType};
use crate::domain::repositories::{FileReader, ReadError};
use crate::domain::services::{signature_matcher, SignatureTable};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that abort detection
///
/// Failing to read one candidate's prefix is not an error; only a file that
/// cannot be opened for any candidate is.
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("Could not inspect file: {0}")]
    Inaccessible(#[from] ReadError),
}

/// Magic-number based file type detector
///
/// Every candidate signature is tested with its own bounded read of exactly
/// the signature's length, so a file too short for one variant can still
/// match a shorter one of the same type.
///
/// # Example
///
/// ```no_run
/// use filesniff::domain::entities::FileType;
/// use filesniff::domain::services::FileTypeDetector;
/// use filesniff::infrastructure::persistence::LocalFileReader;
/// use std::path::Path;
///
/// let detector = FileTypeDetector::new(LocalFileReader::new());
/// let file_type = detector.classify(Path::new("/bin/ls"))?;
/// assert_eq!(file_type, FileType::Elf);
/// # Ok::<(), filesniff::domain::services::DetectError>(())
/// ```
#[derive(Debug)]
pub struct FileTypeDetector<R: FileReader> {
    reader: R,
    table: &'static SignatureTable,
}

impl<R: FileReader> FileTypeDetector<R> {
    /// Creates a detector over the builtin signature table
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            table: SignatureTable::builtin(),
        }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Returns true if the file matches any signature of `file_type`
    pub fn detect(&self, path: &Path, file_type: FileType) -> Result<bool, DetectError> {
        Ok(self.identify_as(path, file_type)?.is_some())
    }

    /// Classifies the file, trying every known type in table order
    ///
    /// Returns [`FileType::Unknown`] when nothing matches.
    pub fn classify(&self, path: &Path) -> Result<FileType, DetectError> {
        Ok(self
            .identify(path)?
            .map_or(FileType::Unknown, |detection| detection.file_type()))
    }

    /// Like [`classify`](Self::classify) but reports which signature matched
    pub fn identify(&self, path: &Path) -> Result<Option<Detection>, DetectError> {
        for file_type in self.table.file_types() {
            if let Some(detection) = self.identify_as(path, file_type)? {
                return Ok(Some(detection));
            }
        }
        Ok(None)
    }

    /// Tries only the given types, in the order given
    pub fn identify_among(
        &self,
        path: &Path,
        types: &[FileType],
    ) -> Result<Option<Detection>, DetectError> {
        for &file_type in types {
            if let Some(detection) = self.identify_as(path, file_type)? {
                return Ok(Some(detection));
            }
        }
        Ok(None)
    }

    /// Tests each candidate signature of `file_type` in order
    ///
    /// The first match wins. A candidate whose read fails counts as a
    /// mismatch. Fails only if the file could not be opened for any
    /// candidate.
    pub fn identify_as(
        &self,
        path: &Path,
        file_type: FileType,
    ) -> Result<Option<Detection>, DetectError> {
        let mut opened = false;
        let mut open_failure = None;

        for signature in self.table.signatures(file_type) {
            match self.reader.read_prefix(path, signature.len()) {
                Ok(buffer) => {
                    opened = true;
                    if signature_matcher::matches(&buffer, signature) {
                        debug!(
                            path = %path.display(),
                            %file_type,
                            signature = signature.name(),
                            "signature matched"
                        );
                        return Ok(Some(Detection::new(file_type, signature, buffer)));
                    }
                    trace!(
                        path = %path.display(),
                        signature = signature.name(),
                        "signature did not match"
                    );
                }
                Err(err) if err.is_open_failure() => {
                    debug!(signature = signature.name(), error = %err, "could not open file");
                    open_failure = Some(err);
                }
                Err(err) => {
                    opened = true;
                    debug!(signature = signature.name(), error = %err, "candidate read failed");
                }
            }
        }

        match open_failure {
            Some(err) if !opened => Err(err.into()),
            _ => Ok(None),
        }
    }
}

//! filesniff - magic-number file type detection
//!
//! Identifies ELF, PNG, PDF and JPEG files from the first few bytes of their
//! contents, and provides the bounded and whole-file reads, whole-file
//! writes and size queries the detector is built on.
//!
//! ```no_run
//! use filesniff::domain::entities::FileType;
//!
//! let file_type = filesniff::classify("photo.jpg")?;
//! assert_eq!(file_type, FileType::Jpeg);
//! # Ok::<(), filesniff::domain::services::DetectError>(())
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::entities::{ByteMatcher, Detection, FileType, Signature};
pub use domain::repositories::{FileReader, FileWriter, ReadError, WriteError, WriteOptions};
pub use domain::services::{DetectError, FileTypeDetector, SignatureTable};

use infrastructure::persistence::LocalFileReader;
use std::path::Path;

/// Classifies a file on the local filesystem
pub fn classify(path: impl AsRef<Path>) -> Result<FileType, DetectError> {
    FileTypeDetector::new(LocalFileReader::new()).classify(path.as_ref())
}

/// Returns true if a local file matches any signature of `file_type`
pub fn detect(path: impl AsRef<Path>, file_type: FileType) -> Result<bool, DetectError> {
    FileTypeDetector::new(LocalFileReader::new()).detect(path.as_ref(), file_type)
}

//! File reader trait
//!
//! Defines the read-side collaborator of the detector: bounded prefix reads,
//! whole-file reads and size queries.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when reading a file
#[derive(Error, Debug)]
pub enum ReadError {
    /// The path does not exist or could not be opened
    #[error("Could not open {}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file ended before the requested number of bytes
    #[error("Short read from {}: expected {expected} bytes, got {actual}", .path.display())]
    ShortRead {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    /// The read buffer could not be allocated
    #[error("Could not allocate a {requested} byte buffer")]
    AllocationFailure { requested: u64 },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    pub fn not_found(path: &Path, source: io::Error) -> Self {
        ReadError::NotFound {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn io(path: &Path, source: io::Error) -> Self {
        ReadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns true if the file could not be opened at all
    pub fn is_open_failure(&self) -> bool {
        matches!(self, ReadError::NotFound { .. })
    }
}

/// Trait for reading files from storage
///
/// # Example
///
/// ```
/// use filesniff::domain::repositories::FileReader;
/// use filesniff::infrastructure::persistence::LocalFileReader;
/// use std::path::Path;
///
/// let reader = LocalFileReader::new();
/// let missing = reader.read_prefix(Path::new("/nonexistent/file"), 4);
/// assert!(missing.unwrap_err().is_open_failure());
/// ```
pub trait FileReader: Send + Sync {
    /// Reads exactly `len` bytes from the start of the file
    ///
    /// A file shorter than `len` is a [`ReadError::ShortRead`], never a
    /// truncated buffer.
    fn read_prefix(&self, path: &Path, len: usize) -> Result<Vec<u8>, ReadError>;

    /// Reads the whole file
    fn read_entire(&self, path: &Path) -> Result<Vec<u8>, ReadError>;

    /// Returns the size of the file in bytes
    fn file_size(&self, path: &Path) -> Result<u64, ReadError>;
}

//! File writer trait
//!
//! Defines the interface for writing whole files to storage.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur when writing files
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("File already exists: {0}")]
    FileExists(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Options for writing files
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Whether to replace an existing file
    pub overwrite: bool,
    /// Whether to flush file data to disk before returning
    pub sync: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            overwrite: true,
            sync: true,
        }
    }
}

impl WriteOptions {
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }
}

/// Trait for writing files to storage
///
/// # Example
///
/// ```ignore
/// let writer = LocalFileWriter::new();
/// let written = writer.write_zeroed(Path::new("blank.img"), 4096, &WriteOptions::default())?;
/// assert_eq!(written, 4096);
/// ```
pub trait FileWriter: Send + Sync {
    /// Creates or truncates `path` and writes `data` to it
    ///
    /// Returns the number of bytes written.
    fn write_entire(
        &self,
        path: &Path,
        data: &[u8],
        options: &WriteOptions,
    ) -> Result<u64, WriteError>;

    /// Creates a file holding exactly `size` zero bytes
    fn write_zeroed(
        &self,
        path: &Path,
        size: u64,
        options: &WriteOptions,
    ) -> Result<u64, WriteError>;

    /// Returns the number of files written so far
    fn files_written(&self) -> usize;

    /// Returns the total bytes written so far
    fn bytes_written(&self) -> u64;
}

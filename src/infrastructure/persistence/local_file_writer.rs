//! Local file writer implementation
//!
//! Writes whole files, or zero-filled files of a given size, to the local
//! filesystem.

use crate::domain::repositories::{FileWriter, WriteError, WriteOptions};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Local file system writer
///
/// Keeps running totals of what it has written, shared safely between
/// threads.
#[derive(Debug, Default)]
pub struct LocalFileWriter {
    files_written: AtomicUsize,
    bytes_written: AtomicU64,
}

impl LocalFileWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `path` for writing according to the overwrite policy
    fn create(path: &Path, options: &WriteOptions) -> Result<File, WriteError> {
        let mut open_options = OpenOptions::new();
        open_options.write(true);
        if options.overwrite {
            open_options.create(true).truncate(true);
        } else {
            open_options.create_new(true);
        }

        open_options.open(path).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => WriteError::FileExists(path.display().to_string()),
            io::ErrorKind::PermissionDenied => {
                WriteError::PermissionDenied(path.display().to_string())
            }
            io::ErrorKind::NotFound => WriteError::DirectoryNotFound(
                path.parent()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => WriteError::IoError(e),
        })
    }

    fn finish(&self, file: File, written: u64, options: &WriteOptions) -> Result<u64, WriteError> {
        if options.sync {
            file.sync_all()?;
        }

        self.files_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(written, Ordering::Relaxed);

        Ok(written)
    }
}

impl FileWriter for LocalFileWriter {
    fn write_entire(
        &self,
        path: &Path,
        data: &[u8],
        options: &WriteOptions,
    ) -> Result<u64, WriteError> {
        let mut file = Self::create(path, options)?;
        file.write_all(data)?;
        file.flush()?;

        self.finish(file, data.len() as u64, options)
    }

    fn write_zeroed(
        &self,
        path: &Path,
        size: u64,
        options: &WriteOptions,
    ) -> Result<u64, WriteError> {
        let mut file = Self::create(path, options)?;
        let written = io::copy(&mut io::repeat(0).take(size), &mut file)?;
        file.flush()?;

        self.finish(file, written, options)
    }

    fn files_written(&self) -> usize {
        self.files_written.load(Ordering::Relaxed)
    }

    fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }
}

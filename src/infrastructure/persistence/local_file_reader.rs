//! Local file reader implementation
//!
//! Bounded and whole-file reads from the local filesystem.

use crate::domain::repositories::{FileReader, ReadError};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Local filesystem reader
///
/// Every call opens its own handle and drops it before returning, on error
/// paths too. Nothing is cached between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileReader;

impl LocalFileReader {
    pub fn new() -> Self {
        Self
    }

    fn open(path: &Path) -> Result<File, ReadError> {
        File::open(path).map_err(|e| ReadError::not_found(path, e))
    }

    /// Reserves exactly `len` bytes without aborting on allocation failure
    fn allocate(len: usize) -> Result<Vec<u8>, ReadError> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|_| ReadError::AllocationFailure {
                requested: len as u64,
            })?;
        Ok(buffer)
    }

    /// Size of an open handle
    ///
    /// Block devices report a zero metadata length, so those are measured
    /// by seeking to the end.
    fn handle_size(file: &mut File, path: &Path) -> Result<u64, ReadError> {
        let metadata = file.metadata().map_err(|e| ReadError::io(path, e))?;

        if metadata.is_file() {
            return Ok(metadata.len());
        }

        let size = file
            .seek(SeekFrom::End(0))
            .map_err(|e| ReadError::io(path, e))?;
        file.seek(SeekFrom::Start(0))
            .map_err(|e| ReadError::io(path, e))?;
        Ok(size)
    }
}

impl FileReader for LocalFileReader {
    fn read_prefix(&self, path: &Path, len: usize) -> Result<Vec<u8>, ReadError> {
        let file = Self::open(path)?;
        let mut buffer = Self::allocate(len)?;

        file.take(len as u64)
            .read_to_end(&mut buffer)
            .map_err(|e| ReadError::io(path, e))?;

        if buffer.len() < len {
            return Err(ReadError::ShortRead {
                path: path.to_path_buf(),
                expected: len,
                actual: buffer.len(),
            });
        }

        Ok(buffer)
    }

    fn read_entire(&self, path: &Path) -> Result<Vec<u8>, ReadError> {
        let mut file = Self::open(path)?;
        let size = Self::handle_size(&mut file, path)?;
        let len = usize::try_from(size)
            .map_err(|_| ReadError::AllocationFailure { requested: size })?;

        let mut buffer = Self::allocate(len)?;
        file.read_to_end(&mut buffer)
            .map_err(|e| ReadError::io(path, e))?;

        Ok(buffer)
    }

    fn file_size(&self, path: &Path) -> Result<u64, ReadError> {
        let mut file = Self::open(path)?;
        Self::handle_size(&mut file, path)
    }
}

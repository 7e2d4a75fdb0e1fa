//! File type entity
//!
//! The set of binary formats the detector knows how to recognise.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Types of files that can be identified by their magic number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// ELF executable or shared object
    Elf,
    /// PNG image format
    Png,
    /// PDF document
    Pdf,
    /// JPEG image format (JFIF, Exif and raw variants)
    Jpeg,
    /// No known signature matched
    Unknown,
}

impl FileType {
    /// Every recognisable type, in classification order.
    ///
    /// Shorter signatures come first so the common case reads fewer bytes.
    pub const DETECTABLE: [FileType; 4] =
        [FileType::Elf, FileType::Png, FileType::Pdf, FileType::Jpeg];

    /// Returns the typical file extension for this file type
    pub fn extension(&self) -> &'static str {
        match self {
            FileType::Elf => "elf",
            FileType::Png => "png",
            FileType::Pdf => "pdf",
            FileType::Jpeg => "jpg",
            FileType::Unknown => "bin",
        }
    }

    /// Returns a human-readable name for this file type
    pub fn name(&self) -> &'static str {
        match self {
            FileType::Elf => "ELF Binary",
            FileType::Png => "PNG Image",
            FileType::Pdf => "PDF Document",
            FileType::Jpeg => "JPEG Image",
            FileType::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != FileType::Unknown
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "elf" => Ok(FileType::Elf),
            "png" => Ok(FileType::Png),
            "pdf" => Ok(FileType::Pdf),
            "jpeg" | "jpg" => Ok(FileType::Jpeg),
            other => Err(format!("unknown file type '{other}'")),
        }
    }
}

//! Signature table service
//!
//! The fixed registry of magic numbers used for file type detection. The
//! table lives in static memory and is never modified, so a single instance
//! is shared by every detector and thread.

use crate::domain::entities::{exact, ByteMatcher, FileType, Signature};

static ELF_MAGIC: [ByteMatcher; 4] = exact([0x7F, 0x45, 0x4C, 0x46]);

static PNG_MAGIC: [ByteMatcher; 8] = exact([0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
// Same eight bytes with each 16-bit pair swapped
static PNG_SWAPPED_MAGIC: [ByteMatcher; 8] =
    exact([0x50, 0x89, 0x47, 0x4E, 0x0A, 0x0D, 0x0A, 0x1A]);

// "%PDF-"
static PDF_MAGIC: [ByteMatcher; 5] = exact([0x25, 0x50, 0x44, 0x46, 0x2D]);

static JPEG_JFIF_MAGIC: [ByteMatcher; 12] = exact([
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01,
]);
static JPEG_ADOBE_MAGIC: [ByteMatcher; 4] = exact([0xFF, 0xD8, 0xFF, 0xEE]);
static JPEG_APP0_MAGIC: [ByteMatcher; 4] = exact([0xFF, 0xD8, 0xFF, 0xE0]);
// APP1 segment length (positions 4 and 5) varies between files
static JPEG_EXIF_MAGIC: [ByteMatcher; 12] = [
    ByteMatcher::Exact(0xFF),
    ByteMatcher::Exact(0xD8),
    ByteMatcher::Exact(0xFF),
    ByteMatcher::Exact(0xE1),
    ByteMatcher::Any,
    ByteMatcher::Any,
    ByteMatcher::Exact(0x45),
    ByteMatcher::Exact(0x78),
    ByteMatcher::Exact(0x69),
    ByteMatcher::Exact(0x66),
    ByteMatcher::Exact(0x00),
    ByteMatcher::Exact(0x00),
];

static ELF_SIGNATURES: [Signature; 1] = [Signature::new("elf", &ELF_MAGIC)];

static PNG_SIGNATURES: [Signature; 2] = [
    Signature::new("png", &PNG_MAGIC),
    Signature::new("png-swapped", &PNG_SWAPPED_MAGIC),
];

static PDF_SIGNATURES: [Signature; 1] = [Signature::new("pdf", &PDF_MAGIC)];

static JPEG_SIGNATURES: [Signature; 4] = [
    Signature::new("jfif", &JPEG_JFIF_MAGIC),
    Signature::new("adobe", &JPEG_ADOBE_MAGIC),
    Signature::new("app0", &JPEG_APP0_MAGIC),
    Signature::new("exif", &JPEG_EXIF_MAGIC),
];

static BUILTIN_ENTRIES: [(FileType, &[Signature]); 4] = [
    (FileType::Elf, &ELF_SIGNATURES),
    (FileType::Png, &PNG_SIGNATURES),
    (FileType::Pdf, &PDF_SIGNATURES),
    (FileType::Jpeg, &JPEG_SIGNATURES),
];

static BUILTIN: SignatureTable = SignatureTable {
    entries: &BUILTIN_ENTRIES,
};

/// Read-only registry mapping each file type to its candidate signatures
///
/// Entries are kept in classification order and, within a type, in the
/// order the candidates must be tried.
///
/// # Example
///
/// ```
/// use filesniff::domain::entities::FileType;
/// use filesniff::domain::services::SignatureTable;
///
/// let table = SignatureTable::builtin();
/// assert_eq!(table.signatures(FileType::Jpeg).len(), 4);
/// assert!(table.signatures(FileType::Unknown).is_empty());
/// ```
#[derive(Debug)]
pub struct SignatureTable {
    entries: &'static [(FileType, &'static [Signature])],
}

impl SignatureTable {
    /// Returns the process-wide table of known signatures
    pub fn builtin() -> &'static SignatureTable {
        &BUILTIN
    }

    /// Returns the candidate signatures for a file type, in trial order
    pub fn signatures(&self, file_type: FileType) -> &'static [Signature] {
        self.entries
            .iter()
            .find(|(ft, _)| *ft == file_type)
            .map(|(_, sigs)| *sigs)
            .unwrap_or(&[])
    }

    /// Returns the registered file types in classification order
    pub fn file_types(&self) -> impl Iterator<Item = FileType> + '_ {
        self.entries.iter().map(|(ft, _)| *ft)
    }

    /// Returns every (type, signature) pair in classification order
    pub fn iter(&self) -> impl Iterator<Item = (FileType, &'static Signature)> + '_ {
        self.entries
            .iter()
            .flat_map(|(ft, sigs)| sigs.iter().map(move |sig| (*ft, sig)))
    }

    /// Returns the number of registered signatures
    pub fn signature_count(&self) -> usize {
        self.entries.iter().map(|(_, sigs)| sigs.len()).sum()
    }

    /// Length of the shortest signature; files shorter than this can never match
    pub fn min_len(&self) -> usize {
        self.iter().map(|(_, sig)| sig.len()).min().unwrap_or(0)
    }

    /// Length of the longest signature
    pub fn max_len(&self) -> usize {
        self.iter().map(|(_, sig)| sig.len()).max().unwrap_or(0)
    }
}

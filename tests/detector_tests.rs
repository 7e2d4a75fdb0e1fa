//! File type detector tests
//!
//! Byte-exact classification of real files on disk, plus the per-candidate
//! read policy checked against an in-memory reader.

use filesniff::domain::entities::FileType;
use filesniff::domain::repositories::{FileReader, ReadError};
use filesniff::domain::services::{DetectError, FileTypeDetector};
use filesniff::infrastructure::persistence::LocalFileReader;
use proptest::prelude::*;
use rstest::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

const JFIF_HEADER: [u8; 12] = [
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01,
];

fn exif_header(b4: u8, b5: u8) -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xE1, b4, b5, 0x45, 0x78, 0x69, 0x66, 0x00, 0x00]
}

#[fixture]
fn scratch() -> TempDir {
    TempDir::new().unwrap()
}

fn write_sample(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, data).unwrap();
    path
}

#[fixture]
fn detector() -> FileTypeDetector<LocalFileReader> {
    FileTypeDetector::new(LocalFileReader::new())
}

// ============================================================================
// Classification on disk
// ============================================================================

#[rstest]
#[case::elf(vec![0x7F, 0x45, 0x4C, 0x46], FileType::Elf)]
#[case::elf_with_body(vec![0x7F, 0x45, 0x4C, 0x46, 0x02, 0x01, 0x01, 0x00, 0x00], FileType::Elf)]
#[case::png(vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A], FileType::Png)]
#[case::png_swapped(vec![0x50, 0x89, 0x47, 0x4E, 0x0A, 0x0D, 0x0A, 0x1A, 0xAA], FileType::Png)]
#[case::pdf(vec![0x25, 0x50, 0x44, 0x46, 0x2D], FileType::Pdf)]
#[case::pdf_with_version(b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n".to_vec(), FileType::Pdf)]
#[case::jfif(JFIF_HEADER.to_vec(), FileType::Jpeg)]
#[case::adobe(vec![0xFF, 0xD8, 0xFF, 0xEE], FileType::Jpeg)]
#[case::app0_short(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00], FileType::Jpeg)]
#[case::exif(exif_header(0x12, 0x34), FileType::Jpeg)]
#[case::zeros(vec![0x00, 0x00, 0x00, 0x00], FileType::Unknown)]
#[case::two_bytes(vec![0xFF, 0xD8], FileType::Unknown)]
#[case::empty(vec![], FileType::Unknown)]
#[case::text(b"hello, world\n".to_vec(), FileType::Unknown)]
fn test_classify(
    scratch: TempDir,
    detector: FileTypeDetector<LocalFileReader>,
    #[case] data: Vec<u8>,
    #[case] expected: FileType,
) {
    let path = write_sample(&scratch, "sample", &data);
    assert_eq!(detector.classify(&path).unwrap(), expected);
}

#[rstest]
fn test_identify_reports_signature(
    scratch: TempDir,
    detector: FileTypeDetector<LocalFileReader>,
) {
    let path = write_sample(&scratch, "photo.jpg", &exif_header(0xAB, 0xCD));
    let detection = detector.identify(&path).unwrap().unwrap();

    assert_eq!(detection.file_type(), FileType::Jpeg);
    assert_eq!(detection.signature(), "exif");
    assert_eq!(detection.magic_hex(), "FFD8FFE1ABCD457869660000");
}

#[rstest]
fn test_detect_only_requested_type(
    scratch: TempDir,
    detector: FileTypeDetector<LocalFileReader>,
) {
    let path = write_sample(&scratch, "doc.pdf", b"%PDF-1.4");

    assert!(detector.detect(&path, FileType::Pdf).unwrap());
    assert!(!detector.detect(&path, FileType::Elf).unwrap());
    assert!(!detector.detect(&path, FileType::Jpeg).unwrap());
    assert!(!detector.detect(&path, FileType::Unknown).unwrap());
}

#[rstest]
fn test_detect_is_idempotent(scratch: TempDir, detector: FileTypeDetector<LocalFileReader>) {
    let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    let path = write_sample(&scratch, "image.png", &png);

    let first = detector.detect(&path, FileType::Png).unwrap();
    let second = detector.detect(&path, FileType::Png).unwrap();
    assert!(first);
    assert_eq!(first, second);
    assert_eq!(fs::read(&path).unwrap().len(), 8);
}

#[rstest]
fn test_short_jfif_falls_through_to_app0(
    scratch: TempDir,
    detector: FileTypeDetector<LocalFileReader>,
) {
    // Too short for the 12-byte JFIF candidate, long enough for the 4-byte one
    let path = write_sample(&scratch, "truncated.jpg", &JFIF_HEADER[..6]);
    let detection = detector.identify_as(&path, FileType::Jpeg).unwrap().unwrap();
    assert_eq!(detection.signature(), "app0");
}

#[rstest]
fn test_identify_among_respects_filter(
    scratch: TempDir,
    detector: FileTypeDetector<LocalFileReader>,
) {
    let path = write_sample(&scratch, "bin", &[0x7F, 0x45, 0x4C, 0x46]);

    assert!(detector.identify_among(&path, &[FileType::Png, FileType::Pdf]).unwrap().is_none());
    let found = detector.identify_among(&path, &[FileType::Png, FileType::Elf]).unwrap();
    assert_eq!(found.map(|d| d.file_type()), Some(FileType::Elf));
}

#[rstest]
fn test_missing_file_is_an_error(scratch: TempDir, detector: FileTypeDetector<LocalFileReader>) {
    let path = scratch.path().join("does-not-exist");

    let err = detector.classify(&path).unwrap_err();
    let DetectError::Inaccessible(source) = err;
    assert!(source.is_open_failure());
    assert!(detector.detect(&path, FileType::Jpeg).is_err());
}

#[rstest]
fn test_library_shortcuts(scratch: TempDir) {
    let path = write_sample(&scratch, "a.elf", &[0x7F, 0x45, 0x4C, 0x46, 0x01]);
    assert_eq!(filesniff::classify(&path).unwrap(), FileType::Elf);
    assert!(filesniff::detect(&path, FileType::Elf).unwrap());
}

// ============================================================================
// Read policy with an in-memory reader
// ============================================================================

/// Serves a fixed byte string, optionally failing the first few reads
struct MemoryReader {
    data: Vec<u8>,
    failures: Mutex<Vec<ReadError>>,
    requested: Mutex<Vec<usize>>,
}

impl MemoryReader {
    fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            failures: Mutex::new(Vec::new()),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Queues errors returned, in order, before any data is served
    fn failing_with(self, mut failures: Vec<ReadError>) -> Self {
        failures.reverse();
        *self.failures.lock().unwrap() = failures;
        self
    }

    fn requested(&self) -> Vec<usize> {
        self.requested.lock().unwrap().clone()
    }
}

impl FileReader for MemoryReader {
    fn read_prefix(&self, path: &Path, len: usize) -> Result<Vec<u8>, ReadError> {
        self.requested.lock().unwrap().push(len);
        if let Some(err) = self.failures.lock().unwrap().pop() {
            return Err(err);
        }
        if self.data.len() < len {
            return Err(ReadError::ShortRead {
                path: path.to_path_buf(),
                expected: len,
                actual: self.data.len(),
            });
        }
        Ok(self.data[..len].to_vec())
    }

    fn read_entire(&self, _path: &Path) -> Result<Vec<u8>, ReadError> {
        Ok(self.data.clone())
    }

    fn file_size(&self, _path: &Path) -> Result<u64, ReadError> {
        Ok(self.data.len() as u64)
    }
}

fn io_failure() -> ReadError {
    ReadError::io(Path::new("mem"), io::Error::other("device hiccup"))
}

fn open_failure() -> ReadError {
    ReadError::not_found(Path::new("mem"), io::Error::from(io::ErrorKind::NotFound))
}

#[rstest]
fn test_each_candidate_reads_its_own_length() {
    let detector = FileTypeDetector::new(MemoryReader::new(&exif_header(0, 0)));

    assert!(detector.detect(Path::new("mem"), FileType::Jpeg).unwrap());
    assert_eq!(detector.reader().requested(), vec![12, 4, 4, 12]);
}

#[rstest]
fn test_first_match_stops_the_search() {
    let detector = FileTypeDetector::new(MemoryReader::new(&JFIF_HEADER));

    let detection = detector.identify_as(Path::new("mem"), FileType::Jpeg).unwrap().unwrap();
    assert_eq!(detection.signature(), "jfif");
    assert_eq!(detector.reader().requested(), vec![12]);
}

#[rstest]
fn test_failed_read_moves_to_next_candidate() {
    let reader = MemoryReader::new(&[0x50, 0x89, 0x47, 0x4E, 0x0A, 0x0D, 0x0A, 0x1A])
        .failing_with(vec![io_failure()]);
    let detector = FileTypeDetector::new(reader);

    assert!(detector.detect(Path::new("mem"), FileType::Png).unwrap());
    assert_eq!(detector.reader().requested(), vec![8, 8]);
}

#[rstest]
fn test_failed_last_candidate_is_a_mismatch() {
    let reader = MemoryReader::new(&[0x7F, 0x45, 0x4C, 0x46]).failing_with(vec![io_failure()]);
    let detector = FileTypeDetector::new(reader);

    assert!(!detector.detect(Path::new("mem"), FileType::Elf).unwrap());
}

#[rstest]
fn test_allocation_failure_is_a_mismatch() {
    let reader = MemoryReader::new(&[0x7F, 0x45, 0x4C, 0x46])
        .failing_with(vec![ReadError::AllocationFailure { requested: 4 }]);
    let detector = FileTypeDetector::new(reader);

    assert!(!detector.detect(Path::new("mem"), FileType::Elf).unwrap());
}

#[rstest]
fn test_allocation_failure_falls_through_to_next_candidate() {
    let reader = MemoryReader::new(&[0xFF, 0xD8, 0xFF, 0xEE])
        .failing_with(vec![ReadError::AllocationFailure { requested: 12 }]);
    let detector = FileTypeDetector::new(reader);

    let detection = detector.identify_as(Path::new("mem"), FileType::Jpeg).unwrap().unwrap();
    assert_eq!(detection.signature(), "adobe");
    assert_eq!(detector.reader().requested(), vec![12, 4]);
}

#[rstest]
fn test_open_failure_on_one_candidate_is_recoverable() {
    let reader = MemoryReader::new(&[0xFF, 0xD8, 0xFF, 0xEE]).failing_with(vec![open_failure()]);
    let detector = FileTypeDetector::new(reader);

    assert!(detector.detect(Path::new("mem"), FileType::Jpeg).unwrap());
}

#[rstest]
fn test_open_failure_on_every_candidate_is_reported_once() {
    let reader = MemoryReader::new(&[]).failing_with((0..8).map(|_| open_failure()).collect());
    let detector = FileTypeDetector::new(reader);

    assert!(detector.classify(Path::new("mem")).is_err());
    // ELF has a single candidate, so classification stops right there
    assert_eq!(detector.reader().requested(), vec![4]);
}

#[rstest]
fn test_short_file_tries_every_candidate() {
    let detector = FileTypeDetector::new(MemoryReader::new(&[0xFF, 0xD8]));

    assert_eq!(detector.classify(Path::new("mem")).unwrap(), FileType::Unknown);
    assert_eq!(detector.reader().requested(), vec![4, 8, 8, 5, 12, 4, 4, 12]);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_exif_wildcards_never_matter(b4 in any::<u8>(), b5 in any::<u8>()) {
        let detector = FileTypeDetector::new(MemoryReader::new(&exif_header(b4, b5)));
        prop_assert_eq!(detector.classify(Path::new("mem")).unwrap(), FileType::Jpeg);
    }

    #[test]
    fn prop_files_shorter_than_every_signature_are_unknown(
        data in proptest::collection::vec(any::<u8>(), 0..4)
    ) {
        let detector = FileTypeDetector::new(MemoryReader::new(&data));
        prop_assert_eq!(detector.classify(Path::new("mem")).unwrap(), FileType::Unknown);
    }

    #[test]
    fn prop_classify_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..16)) {
        let detector = FileTypeDetector::new(MemoryReader::new(&data));
        let first = detector.classify(Path::new("mem")).unwrap();
        let second = detector.classify(Path::new("mem")).unwrap();
        prop_assert_eq!(first, second);
    }
}

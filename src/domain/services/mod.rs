//! Domain services
//!
//! Signature lookup, matching and file type detection.

mod file_type_detector;
pub mod signature_matcher;
mod signature_table;

pub use file_type_detector::{DetectError, FileTypeDetector};
pub use signature_table::SignatureTable;

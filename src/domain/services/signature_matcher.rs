//! Signature matching
//!
//! Compares a buffer read from the start of a file against one signature.

use crate::domain::entities::Signature;

/// Returns true if `buffer` matches `signature` position by position
///
/// The buffer must be exactly as long as the signature; any other length is
/// a mismatch. Wildcard positions accept every byte. Stops at the first
/// rejected position.
///
/// ```
/// use filesniff::domain::services::{signature_matcher, SignatureTable};
/// use filesniff::domain::entities::FileType;
///
/// let exif = &SignatureTable::builtin().signatures(FileType::Jpeg)[3];
/// let data: [u8; 12] = [0xFF, 0xD8, 0xFF, 0xE1, 0x12, 0x34, 0x45, 0x78, 0x69, 0x66, 0x00, 0x00];
/// assert!(signature_matcher::matches(&data, exif));
/// ```
pub fn matches(buffer: &[u8], signature: &Signature) -> bool {
    if buffer.len() != signature.len() {
        return false;
    }

    buffer
        .iter()
        .zip(signature.matchers())
        .all(|(byte, matcher)| matcher.accepts(*byte))
}

/// Returns true if `data` begins with `signature`
///
/// Convenience for callers that already hold more of the file than the
/// signature needs.
pub fn matches_prefix(data: &[u8], signature: &Signature) -> bool {
    data.get(..signature.len())
        .is_some_and(|prefix| matches(prefix, signature))
}

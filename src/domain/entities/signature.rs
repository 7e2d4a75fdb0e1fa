//! File signature entity
//!
//! A signature is the run of magic bytes at the start of a file that
//! identifies its format. Some formats leave a few positions free (the Exif
//! segment length in JPEG), so each position is a [`ByteMatcher`] rather
//! than a plain byte.

use std::fmt;

/// A single position in a signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteMatcher {
    /// The byte at this position must equal the value
    Exact(u8),
    /// Any byte is accepted at this position
    Any,
}

impl ByteMatcher {
    /// Returns true if `byte` is accepted at this position
    pub const fn accepts(&self, byte: u8) -> bool {
        match self {
            ByteMatcher::Exact(expected) => *expected == byte,
            ByteMatcher::Any => true,
        }
    }

    pub const fn is_wildcard(&self) -> bool {
        matches!(self, ByteMatcher::Any)
    }
}

/// Builds a matcher array with every position fixed to the given bytes.
pub const fn exact<const N: usize>(bytes: [u8; N]) -> [ByteMatcher; N] {
    let mut matchers = [ByteMatcher::Any; N];
    let mut i = 0;
    while i < N {
        matchers[i] = ByteMatcher::Exact(bytes[i]);
        i += 1;
    }
    matchers
}

/// A named, fixed-length magic-number pattern
///
/// The length of the pattern is also the number of bytes that must be read
/// from a file to test it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    name: &'static str,
    matchers: &'static [ByteMatcher],
}

impl Signature {
    /// Creates a signature from a static matcher table
    pub const fn new(name: &'static str, matchers: &'static [ByteMatcher]) -> Self {
        Self { name, matchers }
    }

    /// Short identifier of the variant (e.g. "jfif", "exif")
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn matchers(&self) -> &'static [ByteMatcher] {
        self.matchers
    }

    /// Number of bytes needed to test this signature
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Returns the number of wildcard positions
    pub fn wildcard_count(&self) -> usize {
        self.matchers.iter().filter(|m| m.is_wildcard()).count()
    }
}

impl fmt::Display for Signature {
    /// Renders the pattern as spaced hex, wildcards as `??`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, matcher) in self.matchers.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match matcher {
                ByteMatcher::Exact(byte) => write!(f, "{byte:02X}")?,
                ByteMatcher::Any => f.write_str("??")?,
            }
        }
        Ok(())
    }
}

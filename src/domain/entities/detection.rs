//! Detection entity
//!
//! Records which signature identified a file and the bytes that matched.

use super::{FileType, Signature};
use serde::{Serialize, Serializer};

/// A successful signature match against the start of a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    file_type: FileType,
    signature: &'static str,
    #[serde(serialize_with = "serialize_hex")]
    magic: Vec<u8>,
}

impl Detection {
    pub fn new(file_type: FileType, signature: &Signature, magic: Vec<u8>) -> Self {
        Self {
            file_type,
            signature: signature.name(),
            magic,
        }
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Name of the signature variant that matched
    pub fn signature(&self) -> &'static str {
        self.signature
    }

    /// The prefix bytes read from the file, wildcard positions included
    pub fn magic(&self) -> &[u8] {
        &self.magic
    }

    /// The matched prefix as upper-case hex
    pub fn magic_hex(&self) -> String {
        hex::encode_upper(&self.magic)
    }
}

fn serialize_hex<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode_upper(bytes))
}

//! Domain entities
//!
//! Core objects of file identification: the known types, their magic-number
//! signatures and the result of a successful match.

mod detection;
mod file_type;
mod signature;

pub use detection::Detection;
pub use file_type::FileType;
pub use signature::{exact, ByteMatcher, Signature};

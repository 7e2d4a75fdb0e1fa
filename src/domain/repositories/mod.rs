//! Repository traits (interfaces)
//!
//! These traits define the contracts for the filesystem collaborators the
//! domain services depend on.

mod file_reader;
mod file_writer;

pub use file_reader::{FileReader, ReadError};
pub use file_writer::{FileWriter, WriteError, WriteOptions};

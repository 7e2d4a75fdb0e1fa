//! Application layer
//!
//! Use cases that orchestrate the detection services over many files.

mod classify_files;
pub mod dto;

pub use classify_files::ClassifyFilesUseCase;

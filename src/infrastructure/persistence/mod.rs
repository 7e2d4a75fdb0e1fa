//! Local filesystem persistence

mod local_file_reader;
mod local_file_writer;

pub use local_file_reader::LocalFileReader;
pub use local_file_writer::LocalFileWriter;

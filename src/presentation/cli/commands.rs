//! CLI commands using clap

use crate::domain::entities::FileType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// filesniff - File type identification and low-level file utilities
///
/// Identifies ELF, PNG, PDF and JPEG files by their magic numbers and
/// performs whole-file reads, writes and zero-fills.
#[derive(Parser)]
#[command(name = "filesniff")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Identify files by magic number", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify one or more files
    Classify {
        /// Files to classify
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// File types to test for (elf, png, pdf, jpeg)
        #[arg(short = 't', long, value_delimiter = ',')]
        types: Option<Vec<String>>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Classify one file at a time
        #[arg(long)]
        sequential: bool,

        /// Include file sizes in the report
        #[arg(long)]
        size: bool,
    },

    /// Check whether a file is of the given type (exit status 1 if not)
    Detect {
        /// Expected file type (elf, png, pdf, jpeg)
        #[arg(short = 't', long = "type")]
        file_type: String,

        path: PathBuf,
    },

    /// Print the size of a file in bytes
    Size { path: PathBuf },

    /// Create a file filled with zero bytes
    Zero {
        path: PathBuf,

        /// Number of zero bytes to write
        #[arg(short, long)]
        size: u64,

        /// Replace the file if it exists
        #[arg(long)]
        overwrite: bool,
    },

    /// Copy a file by reading it whole and writing it whole
    Copy {
        source: PathBuf,

        destination: PathBuf,

        /// Replace the destination if it exists
        #[arg(long)]
        overwrite: bool,
    },

    /// List supported file signatures
    ListSignatures,
}

/// Parses file type strings to FileType enum
///
/// Unrecognised names are skipped with a warning.
pub fn parse_file_types(types: Option<Vec<String>>) -> Vec<FileType> {
    match types {
        None => vec![], // All types
        Some(type_strs) => type_strs
            .iter()
            .filter_map(|s| match s.parse::<FileType>() {
                Ok(file_type) => Some(file_type),
                Err(err) => {
                    tracing::warn!("Ignoring {}", err);
                    None
                }
            })
            .collect(),
    }
}

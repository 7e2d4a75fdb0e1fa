//! CLI module

mod commands;
mod report;

pub use commands::{parse_file_types, Cli, Commands};
pub use report::{render_report, render_signatures};

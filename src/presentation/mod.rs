//! Presentation layer
//!
//! Command-line definitions and output rendering.

pub mod cli;

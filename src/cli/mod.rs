//! Command-line interface for taskforge.
//!
//! Provides commands for generating task descriptions and inspecting the
//! reference dataset.

mod commands;

pub use commands::{parse_cli, run, run_with_cli, Cli, Commands, OutputFormat};

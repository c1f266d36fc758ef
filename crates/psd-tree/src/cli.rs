// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for `psd-tree`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "psd-tree",
    version,
    about = "Print the layer/group tree of a PSD file.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the PSD file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

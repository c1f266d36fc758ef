// src/lib.rs

pub mod adapt;
pub mod cli;
pub mod node;
pub mod render;

use std::fs;

use anyhow::{Context, Result, anyhow};
use psd::Psd;

use crate::cli::CliArgs;

/// High-level entry point used by `main.rs`.
///
/// Reads the file, parses it via the `psd` crate, adapts the document into
/// the internal node tree and prints it.
pub fn run(args: CliArgs) -> Result<()> {
    let path = &args.file;

    let bytes = fs::read(path).with_context(|| format!("reading PSD file {:?}", path))?;
    let size_mb = bytes.len() as f64 / 1024.0 / 1024.0;

    let psd =
        Psd::from_bytes(&bytes).map_err(|err| anyhow!("parsing PSD file {:?}: {err}", path))?;

    println!("Reading PSD file: {}", path.display());
    println!("File size: {size_mb:.2} MB");
    println!("Document: {}x{} px", psd.width(), psd.height());
    println!();

    let nodes = adapt::tree_from_psd(&psd);
    if nodes.is_empty() {
        println!("No layers found.");
        return Ok(());
    }

    println!("Layer tree:");
    print!("{}", render::render_tree(&nodes));

    Ok(())
}

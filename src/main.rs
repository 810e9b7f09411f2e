//! wordtint - word frequency preview for the terminal
//!
//! Reads a text file, counts word occurrences case-insensitively, and prints
//! the first lines with each word colored by how often it appears.

use anyhow::Result;
use clap::Parser;

use wordtint::cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}

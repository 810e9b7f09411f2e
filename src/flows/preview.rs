//! Preview flow - load, count, then render
//!
//! Missing or unreadable input is not an error here: the loader reports it
//! and the flow renders nothing.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use crate::core::counter::{count_words, WordFrequencyTable};
use crate::core::loader::load_content;
use crate::core::paths::default_input_path;
use crate::core::render::{RenderConfig, Renderer};

/// Words listed in the verbose summary
const SUMMARY_TOP_N: usize = 5;

/// Options for a preview run
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewOptions {
    pub render: RenderConfig,
    /// Print a frequency summary to stderr
    pub verbose: bool,
}

/// Run the preview pipeline on `path`, writing the preview to `writer`
pub fn run_preview<W: Write>(path: &Path, options: PreviewOptions, writer: W) -> Result<()> {
    let content = load_content(path);
    if content.is_empty() {
        return Ok(());
    }

    let table = count_words(&content);
    if options.verbose {
        print_summary(path, &table);
    }

    Renderer::with_config(options.render)
        .render_to(writer, &content, &table)
        .context("Failed to write preview")
}

/// Preview the default input file to stdout with default options
pub fn run() -> Result<()> {
    let stdout = io::stdout();
    run_preview(
        &default_input_path(),
        PreviewOptions::default(),
        stdout.lock(),
    )
}

fn print_summary(path: &Path, table: &WordFrequencyTable) {
    eprintln!("{}", path.display());
    eprintln!("  Words:    {}", table.total());
    eprintln!("  Distinct: {}", table.distinct());
    for (word, count) in table.top(SUMMARY_TOP_N) {
        eprintln!("  {:20} {}", word, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn plain() -> PreviewOptions {
        PreviewOptions {
            render: RenderConfig::default().with_color(false),
            verbose: false,
        }
    }

    #[test]
    fn test_run_preview_renders_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("declaration.txt");
        fs::write(&path, "Hello, world! Hello.\ncat dog cat\n").unwrap();

        let mut out = Vec::new();
        run_preview(&path, plain(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hello world Hello \ncat dog cat \n \n"
        );
    }

    #[test]
    fn test_run_preview_missing_file_is_silent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.txt");

        let mut out = Vec::new();
        run_preview(&path, plain(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_preview_empty_file_is_silent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let mut out = Vec::new();
        run_preview(&path, plain(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_preview_limits_lines() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("long.txt");
        let text = (1..=20)
            .map(|i| format!("row {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(&path, text).unwrap();

        let mut out = Vec::new();
        run_preview(&path, plain(), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "row 1 ");
        assert_eq!(lines[14], "row 15 ");
    }
}

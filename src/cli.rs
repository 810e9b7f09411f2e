//! CLI module - Command-line interface definitions and handler

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use crate::core::paths::default_input_path;
use crate::core::render::{OutputFormat, RenderConfig, DEFAULT_PREVIEW_LINES};
use crate::flows::preview::{run_preview, PreviewOptions};

/// wordtint - preview a text file with every word colored by its frequency.
#[derive(Parser, Debug)]
#[command(name = "wordtint")]
#[command(
    author,
    version,
    about,
    long_about = r#"wordtint counts how often each word occurs in a text file (case-insensitive)
and prints the first lines of the file with every word colored by frequency.

Colors:
- blue:  rare (seen once)
- green: common (seen 2 to 5 times)
- red:   frequent (seen 6 times or more)

Punctuation is dropped; words keep their original case.

Examples:
    wordtint
    wordtint speech.txt --lines 30
    wordtint speech.txt --format jsonl
"#
)]
pub struct Cli {
    /// Text file to preview.
    #[arg(
        value_name = "FILE",
        long_help = "Text file to preview.\n\n\
If omitted, declaration.txt next to the wordtint executable is read."
    )]
    pub input: Option<PathBuf>,

    /// Number of lines to preview.
    #[arg(short = 'n', long, default_value_t = DEFAULT_PREVIEW_LINES, value_name = "N")]
    pub lines: usize,

    /// Output format (text/jsonl).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default): colored words, one line per source line\n\
- jsonl: one JSON object per source line with each token's count and category"
    )]
    pub format: String,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors. Setting NO_COLOR has the same effect."
    )]
    pub no_color: bool,

    /// Verbose mode (print a frequency summary to stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_else(|e| {
        eprintln!("{}, using text", e);
        OutputFormat::Text
    });
    let render = RenderConfig::new(format)
        .with_max_lines(cli.lines)
        .with_color(!cli.no_color);

    let options = PreviewOptions {
        render,
        verbose: cli.verbose,
    };
    let input = cli.input.unwrap_or_else(default_input_path);

    let stdout = io::stdout();
    run_preview(&input, options, stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["wordtint"]);
        assert!(cli.input.is_none());
        assert_eq!(cli.lines, 15);
        assert_eq!(cli.format, "text");
        assert!(!cli.no_color);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_options() {
        let cli = Cli::parse_from([
            "wordtint",
            "speech.txt",
            "-n",
            "3",
            "--format",
            "jsonl",
            "--no-color",
            "-v",
        ]);
        assert_eq!(cli.input, Some(PathBuf::from("speech.txt")));
        assert_eq!(cli.lines, 3);
        assert_eq!(cli.format, "jsonl");
        assert!(cli.no_color);
        assert!(cli.verbose);
    }
}

//! Renderer module
//!
//! Renders the preview of a text to different output formats: text, jsonl

use colored::Colorize;
use std::io::{self, Write};

use crate::core::counter::WordFrequencyTable;
use crate::core::model::{AnnotatedLine, TaggedToken};
use crate::core::tokenizer::tokenize;

/// Number of lines shown by default
pub const DEFAULT_PREVIEW_LINES: usize = 15;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub format: OutputFormat,
    /// Maximum number of source lines to render
    pub max_lines: usize,
    /// Apply ANSI colors in text format
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            max_lines: DEFAULT_PREVIEW_LINES,
            color: true,
        }
    }
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Tag every token of one source line with its global frequency
pub fn annotate_line(line_no: usize, line: &str, table: &WordFrequencyTable) -> AnnotatedLine {
    let mut annotated = AnnotatedLine::new(line_no);
    for token in tokenize(line) {
        annotated.push(TaggedToken::new(token, table.get(token)));
    }
    annotated
}

/// Annotate the first `max_lines` lines of `text`
pub fn annotate_preview(
    text: &str,
    table: &WordFrequencyTable,
    max_lines: usize,
) -> Vec<AnnotatedLine> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .take(max_lines)
        .enumerate()
        .map(|(i, line)| annotate_line(i + 1, line, table))
        .collect()
}

/// Renderer for annotated previews
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a single annotated line, without the line terminator
    pub fn render_line(&self, line: &AnnotatedLine) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(line),
            OutputFormat::Jsonl => self.render_jsonl(line),
        }
    }

    /// Render the preview of `text` to a writer, one output line per source line
    pub fn render_to<W: Write>(
        &self,
        mut writer: W,
        text: &str,
        table: &WordFrequencyTable,
    ) -> io::Result<()> {
        for line in annotate_preview(text, table, self.config.max_lines) {
            writeln!(writer, "{}", self.render_line(&line))?;
        }
        writer.flush()
    }

    /// Styled tokens joined by single spaces, plus a trailing space
    fn render_text(&self, line: &AnnotatedLine) -> String {
        if !self.config.color {
            return line.plain_text();
        }

        let mut out = line
            .tokens
            .iter()
            .map(|t| t.token.as_str().color(t.category.color()).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push(' ');
        out
    }

    /// Render as a single JSON object
    fn render_jsonl(&self, line: &AnnotatedLine) -> String {
        serde_json::to_string(line).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Render the default preview of `text` to stdout
pub fn render_preview(text: &str, table: &WordFrequencyTable) -> io::Result<()> {
    let stdout = io::stdout();
    Renderer::with_config(RenderConfig::default()).render_to(stdout.lock(), text, table)
}

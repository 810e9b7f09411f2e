//! Annotated line model
//!
//! Every preview line is mapped to an [`AnnotatedLine`] before it is rendered,
//! whatever the output format.

use serde::{Deserialize, Serialize};

use crate::core::classify::{classify, DisplayCategory};

/// A token in its original case, tagged with its global frequency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: String,
    pub count: usize,
    pub category: DisplayCategory,
}

impl TaggedToken {
    /// Tag `token` with the category derived from `count`
    pub fn new(token: impl Into<String>, count: usize) -> Self {
        Self {
            token: token.into(),
            count,
            category: classify(count),
        }
    }
}

/// One preview line, as an ordered list of tagged tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedLine {
    /// 1-based line number in the source text
    pub line: usize,
    pub tokens: Vec<TaggedToken>,
}

impl AnnotatedLine {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            tokens: Vec::new(),
        }
    }

    pub fn push(&mut self, token: TaggedToken) {
        self.tokens.push(token);
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens without styling, joined by single spaces plus a trailing space
    pub fn plain_text(&self) -> String {
        let mut out = self
            .tokens
            .iter()
            .map(|t| t.token.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        out.push(' ');
        out
    }
}

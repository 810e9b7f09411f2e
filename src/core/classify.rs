//! Frequency classification
//!
//! Maps a word's occurrence count to a display category, and a category to
//! the terminal color used to draw it.

use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest count still classified as common
pub const COMMON_MAX: usize = 5;

/// How often a word occurs in the whole text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayCategory {
    /// Seen once (or not at all)
    Rare,
    /// Seen 2 to 5 times
    Common,
    /// Seen 6 times or more
    Frequent,
}

impl DisplayCategory {
    /// Terminal color for this category
    pub fn color(&self) -> Color {
        match self {
            DisplayCategory::Rare => Color::Blue,
            DisplayCategory::Common => Color::Green,
            DisplayCategory::Frequent => Color::Red,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayCategory::Rare => "rare",
            DisplayCategory::Common => "common",
            DisplayCategory::Frequent => "frequent",
        }
    }
}

impl fmt::Display for DisplayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DisplayCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rare" => Ok(DisplayCategory::Rare),
            "common" => Ok(DisplayCategory::Common),
            "frequent" => Ok(DisplayCategory::Frequent),
            _ => Err(format!(
                "Unknown category: {}. Available: rare, common, frequent",
                s
            )),
        }
    }
}

/// Classify an occurrence count. A count of 0 is treated as rare.
pub fn classify(count: usize) -> DisplayCategory {
    match count {
        0 | 1 => DisplayCategory::Rare,
        2..=COMMON_MAX => DisplayCategory::Common,
        _ => DisplayCategory::Frequent,
    }
}

//! Word tokenizer
//!
//! A token is a maximal run of ASCII word characters (`[A-Za-z0-9_]`).
//! Counting and rendering both split through [`tokenize`], so the keys of a
//! frequency table always line up with the tokens of a rendered line.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of non-word characters
pub static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("Invalid SEPARATOR_RE regex"));

/// Split `text` into word tokens, in order of appearance
pub fn tokenize(text: &str) -> Vec<&str> {
    SEPARATOR_RE
        .split(text)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Lower-case a token for use as a frequency table key
pub fn normalize(token: &str) -> String {
    token.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple() {
        assert_eq!(tokenize("cat dog cat"), vec!["cat", "dog", "cat"]);
    }

    #[test]
    fn test_tokenize_drops_punctuation() {
        assert_eq!(
            tokenize("Hello, world! Hello."),
            vec!["Hello", "world", "Hello"]
        );
    }

    #[test]
    fn test_tokenize_leading_and_trailing_separators() {
        assert_eq!(tokenize("  --when in--  "), vec!["when", "in"]);
    }

    #[test]
    fn test_tokenize_keeps_digits_and_underscore() {
        assert_eq!(
            tokenize("July 4th, 1776: snake_case"),
            vec!["July", "4th", "1776", "snake_case"]
        );
    }

    #[test]
    fn test_tokenize_empty_and_separator_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ,.;!\n\t").is_empty());
    }

    #[test]
    fn test_tokenize_splits_apostrophes_and_crlf() {
        assert_eq!(tokenize("don't\r\n"), vec!["don", "t"]);
    }

    #[test]
    fn test_tokenize_non_ascii_letters_are_separators() {
        assert_eq!(tokenize("café au lait"), vec!["caf", "au", "lait"]);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Hello"), "hello");
        assert_eq!(normalize("USA"), "usa");
    }
}

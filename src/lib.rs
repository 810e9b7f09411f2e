//! wordtint - preview a text file with words colored by frequency
//!
//! The pipeline is load, count, then render:
//!
//! ```no_run
//! use std::path::Path;
//! use wordtint::{count_words, load_content, render_preview};
//!
//! let text = load_content(Path::new("declaration.txt"));
//! if !text.is_empty() {
//!     let table = count_words(&text);
//!     render_preview(&text, &table).unwrap();
//! }
//! ```

pub mod cli;
pub mod core;
pub mod flows;

pub use crate::core::classify::{classify, DisplayCategory};
pub use crate::core::counter::{count_words, WordFrequencyTable};
pub use crate::core::error::InputUnavailable;
pub use crate::core::loader::{load_content, load_content_checked};
pub use crate::core::render::render_preview;
pub use crate::core::tokenizer::tokenize;
pub use crate::flows::preview::run;

//! Core module - The word frequency pipeline
//!
//! This module provides:
//! - Input loading with a structured error type
//! - The shared word tokenizer
//! - Word frequency counting
//! - Frequency classification and category colors
//! - The annotated line model and its renderers
//! - Default input path resolution

pub mod classify;
pub mod counter;
pub mod error;
pub mod loader;
pub mod model;
pub mod paths;
pub mod render;
pub mod tokenizer;

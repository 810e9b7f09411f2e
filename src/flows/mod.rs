//! Flows - End-to-end pipelines built on the core module

pub mod preview;

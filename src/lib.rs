//! Whisper Queue - Batch speech transcription with whisper.cpp
//!
//! This crate contains all transcription logic with no terminal
//! dependencies. It can be used by the CLI binary or embedded in
//! another tool.

pub mod cli;
pub mod config;
pub mod engine;
pub mod formats;
pub mod media;
pub mod models;
pub mod pipeline;
pub mod queue;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

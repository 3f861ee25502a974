//! Resolved configuration for one run.

use std::path::PathBuf;

use super::{Device, Language, ModelTier, OrderCriterion};

/// Everything a run needs, resolved once at startup.
///
/// Built from command-line flags merged over settings-file defaults;
/// immutable for the lifetime of the run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Input file or directory.
    pub input: PathBuf,
    /// Directory transcripts are written to.
    pub output_dir: PathBuf,
    /// Directory containing ggml model files.
    pub models_dir: PathBuf,
    /// Model size tier.
    pub model: ModelTier,
    /// Language of the audio content.
    pub language: Language,
    /// Compute device.
    pub device: Device,
    /// Batch ordering criterion (ignored for a single-file input).
    pub order: OrderCriterion,
}

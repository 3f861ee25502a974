//! Command-line interface.
//!
//! Flags override settings-file defaults field by field; anything not
//! given on the command line falls back to the settings file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, Settings};
use crate::models::{Device, Language, ModelTier, OrderCriterion, RunConfig};

/// Batch speech transcription with whisper.cpp.
///
/// Accepts a single media file or a directory; directory batches are
/// ordered by the chosen criterion and processed sequentially.
#[derive(Parser, Debug)]
#[command(name = "whisper-queue", version, about)]
pub struct Cli {
    /// Media file or directory to transcribe.
    pub input: PathBuf,

    /// Directory transcripts are written to.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory containing ggml model files.
    #[arg(long, value_name = "DIR")]
    pub models_dir: Option<PathBuf>,

    /// Model size tier.
    #[arg(short, long, value_enum)]
    pub model: Option<ModelTier>,

    /// Language of the audio content.
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Compute device.
    #[arg(short, long, value_enum)]
    pub device: Option<Device>,

    /// Order in which directory batches are processed.
    #[arg(long, value_enum)]
    pub order: Option<OrderCriterion>,

    /// Settings file path.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the batch summary as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Merge command-line flags over settings-file defaults into a
    /// resolved run configuration.
    ///
    /// Fails if the input path does not exist.
    pub fn resolve(&self, settings: &Settings) -> Result<RunConfig, ConfigError> {
        if !self.input.exists() {
            return Err(ConfigError::InputNotFound(self.input.clone()));
        }

        Ok(RunConfig {
            input: self.input.clone(),
            output_dir: self
                .output_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(&settings.paths.output_folder)),
            models_dir: self
                .models_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(&settings.paths.models_folder)),
            model: self.model.unwrap_or(settings.defaults.model),
            language: self.language.unwrap_or(settings.defaults.language),
            device: self.device.unwrap_or(settings.defaults.device),
            order: self.order.unwrap_or(settings.defaults.order),
        })
    }
}

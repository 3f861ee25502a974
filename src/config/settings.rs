//! Settings struct with TOML-based sections.
//!
//! The settings file supplies run defaults; command-line flags override
//! field by field. Sections map to TOML tables and can be updated
//! independently.

use serde::{Deserialize, Serialize};

use crate::models::{Device, Language, ModelTier, OrderCriterion};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Default run options.
    #[serde(default)]
    pub defaults: DefaultSettings,
}

/// Directory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Directory containing ggml model files.
    #[serde(default = "default_models_folder")]
    pub models_folder: String,

    /// Directory transcripts are written to.
    #[serde(default = "default_output_folder")]
    pub output_folder: String,
}

fn default_models_folder() -> String {
    "models".to_string()
}

fn default_output_folder() -> String {
    "transcripts".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            models_folder: default_models_folder(),
            output_folder: default_output_folder(),
        }
    }
}

/// Default values for run options not given on the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultSettings {
    /// Model size tier.
    #[serde(default)]
    pub model: ModelTier,

    /// Language of the audio content.
    #[serde(default = "default_language")]
    pub language: Language,

    /// Compute device.
    #[serde(default)]
    pub device: Device,

    /// Batch ordering criterion.
    #[serde(default)]
    pub order: OrderCriterion,
}

fn default_language() -> Language {
    Language::English
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Paths,
    Defaults,
}

impl ConfigSection {
    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Defaults => "defaults",
        }
    }
}

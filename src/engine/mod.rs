//! Speech model boundary.
//!
//! `SpeechEngine` is the seam the batch processor works against; the real
//! implementation wraps whisper.cpp and loads the model once for the whole
//! run.

mod whisper;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::media::MediaError;
use crate::models::Language;

pub use whisper::WhisperEngine;

/// Errors from model loading and transcription.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Model file not found: {path} (download the ggml model for this tier and place it there)")]
    ModelNotFound { path: PathBuf },

    #[error("Model path is not valid UTF-8: {path}")]
    InvalidModelPath { path: PathBuf },

    #[error("Failed to decode audio: {0}")]
    Decode(#[from] MediaError),

    #[error("whisper error: {0}")]
    Whisper(#[from] whisper_rs::WhisperError),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// A speech-to-text engine that turns an audio file into plain text.
pub trait SpeechEngine {
    /// Transcribe the audio file at `audio` in the given language.
    fn transcribe(&self, audio: &Path, language: Language) -> EngineResult<String>;
}

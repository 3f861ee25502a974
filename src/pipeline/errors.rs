//! Error types for per-file processing.
//!
//! Errors carry context that chains through layers:
//! File → Stage → Underlying cause

use std::io;

use thiserror::Error;

use crate::engine::EngineError;
use crate::media::MediaError;

/// Error while processing a single file. Never fatal to the batch: the
/// processor records it in the file's outcome and moves on.
#[derive(Error, Debug)]
pub enum FileError {
    /// Conversion to the mp3 intermediate failed.
    #[error("Conversion of '{path}' failed: {source}")]
    Conversion {
        path: String,
        #[source]
        source: MediaError,
    },

    /// The model failed to transcribe the audio.
    #[error("Transcription of '{path}' failed: {source}")]
    Transcription {
        path: String,
        #[source]
        source: EngineError,
    },

    /// Writing the transcript to disk failed.
    #[error("Failed to write transcript '{path}': {source}")]
    WriteTranscript {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Create a conversion error.
    pub fn conversion(path: impl Into<String>, source: MediaError) -> Self {
        Self::Conversion {
            path: path.into(),
            source,
        }
    }

    /// Create a transcription error.
    pub fn transcription(path: impl Into<String>, source: EngineError) -> Self {
        Self::Transcription {
            path: path.into(),
            source,
        }
    }

    /// Create a transcript write error.
    pub fn write_transcript(path: impl Into<String>, source: io::Error) -> Self {
        Self::WriteTranscript {
            path: path.into(),
            source,
        }
    }
}

/// Result type for per-file operations.
pub type FileResult<T> = Result<T, FileError>;

//! External media handling via ffmpeg: mp3 conversion and PCM decode.

mod convert;
mod decode;

use thiserror::Error;

pub use convert::{convert_to_mp3, converted_path, ensure_mp3};
pub use decode::{decode_pcm, WHISPER_SAMPLE_RATE};

/// Errors from ffmpeg invocations.
#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Source file not found: {0}")]
    SourceNotFound(String),

    #[error("ffmpeg error: {0}")]
    Ffmpeg(String),

    #[error("No audio samples decoded from {0}")]
    EmptyAudio(String),
}

pub type MediaResult<T> = Result<T, MediaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_context() {
        let err = MediaError::Ffmpeg("exited with code Some(1)".to_string());
        assert!(err.to_string().contains("ffmpeg"));

        let err = MediaError::SourceNotFound("/in/a.mkv".to_string());
        assert!(err.to_string().contains("/in/a.mkv"));
    }
}

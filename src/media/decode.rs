//! PCM decode for the speech model.
//!
//! Decodes any input ffmpeg can read to 16 kHz mono f32 samples by piping
//! raw PCM through stdout, which is what whisper.cpp expects.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};

use super::{MediaError, MediaResult};

/// Sample rate whisper models are trained on.
pub const WHISPER_SAMPLE_RATE: u32 = 16_000;

/// Decode a media file to 16 kHz mono f32 samples.
pub fn decode_pcm(input: &Path) -> MediaResult<Vec<f32>> {
    if !input.exists() {
        return Err(MediaError::SourceNotFound(input.display().to_string()));
    }

    let mut cmd = Command::new("ffmpeg");
    cmd.arg("-i")
        .arg(input)
        .arg("-vn") // No video
        .arg("-ac")
        .arg("1") // Mono
        .arg("-ar")
        .arg(WHISPER_SAMPLE_RATE.to_string())
        .arg("-f")
        .arg("f32le") // 32-bit float, little endian
        .arg("-acodec")
        .arg("pcm_f32le")
        .arg("pipe:1"); // Output to stdout

    cmd.stderr(Stdio::null()).stdout(Stdio::piped());

    tracing::debug!("Running ffmpeg: {:?}", cmd);

    let mut child = cmd
        .spawn()
        .map_err(|e| MediaError::Ffmpeg(format!("Failed to spawn ffmpeg: {}", e)))?;

    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| MediaError::Ffmpeg("Failed to capture ffmpeg stdout".to_string()))?;

    let mut buffer = Vec::new();
    stdout
        .read_to_end(&mut buffer)
        .map_err(|e| MediaError::Ffmpeg(format!("Failed to read ffmpeg output: {}", e)))?;

    let status = child
        .wait()
        .map_err(|e| MediaError::Ffmpeg(format!("ffmpeg process error: {}", e)))?;

    if !status.success() {
        return Err(MediaError::Ffmpeg(format!(
            "ffmpeg exited with code {:?} decoding {}",
            status.code(),
            input.display()
        )));
    }

    let samples = bytes_to_f32_samples(&buffer);

    if samples.is_empty() {
        return Err(MediaError::EmptyAudio(input.display().to_string()));
    }

    tracing::debug!(
        "Decoded {} samples ({:.2}s) from {}",
        samples.len(),
        samples.len() as f64 / WHISPER_SAMPLE_RATE as f64,
        input.display()
    );

    Ok(samples)
}

/// Convert raw bytes to f32 samples (little-endian).
fn bytes_to_f32_samples(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| {
            let arr: [u8; 4] = chunk.try_into().expect("chunks_exact yields 4 bytes");
            f32::from_le_bytes(arr)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_to_samples_converts_correctly() {
        let val1: f32 = 0.5;
        let val2: f32 = -0.25;

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&val1.to_le_bytes());
        bytes.extend_from_slice(&val2.to_le_bytes());

        let samples = bytes_to_f32_samples(&bytes);

        assert_eq!(samples.len(), 2);
        assert!((samples[0] - 0.5).abs() < 1e-6);
        assert!((samples[1] - (-0.25)).abs() < 1e-6);
    }

    #[test]
    fn bytes_to_samples_handles_partial() {
        // Only 6 bytes: one sample, remainder ignored
        let bytes = vec![0u8; 6];
        let samples = bytes_to_f32_samples(&bytes);
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn decode_rejects_missing_file() {
        let result = decode_pcm(Path::new("/nonexistent/file.mp3"));
        assert!(matches!(result, Err(MediaError::SourceNotFound(_))));
    }
}

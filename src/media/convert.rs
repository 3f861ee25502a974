//! Conversion of unsupported formats to an mp3 intermediate.
//!
//! The mp3 is written next to the input file (same stem). Conversion is
//! idempotent by path: an existing sibling is reused without inspecting
//! its content, so a stale sibling wins over a changed input.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::{MediaError, MediaResult};

/// The mp3 sibling path a converted input maps to.
pub fn converted_path(input: &Path) -> PathBuf {
    input.with_extension("mp3")
}

/// Return the path of the mp3 version of `input`, converting if needed.
///
/// If the sibling already exists the converter is not invoked again.
pub fn ensure_mp3(input: &Path) -> MediaResult<PathBuf> {
    let mp3_path = converted_path(input);

    if mp3_path.exists() {
        tracing::info!(
            "Existing mp3 version found for {}, skipping conversion",
            input.display()
        );
        return Ok(mp3_path);
    }

    tracing::info!(
        "Converting {} -> {}",
        input.display(),
        mp3_path.display()
    );
    convert_to_mp3(input, &mp3_path)?;
    Ok(mp3_path)
}

/// Extract the audio track of `input` to `output` as mp3 at the highest
/// variable quality. ffmpeg's diagnostics are discarded; only the exit
/// status is inspected.
pub fn convert_to_mp3(input: &Path, output: &Path) -> MediaResult<()> {
    if !input.exists() {
        return Err(MediaError::SourceNotFound(input.display().to_string()));
    }

    let status = Command::new("ffmpeg")
        .arg("-i")
        .arg(input)
        .arg("-q:a")
        .arg("0")
        .arg("-map")
        .arg("a")
        .arg(output)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| MediaError::Ffmpeg(format!("Failed to spawn ffmpeg: {}", e)))?;

    if !status.success() {
        return Err(MediaError::Ffmpeg(format!(
            "ffmpeg exited with code {:?} converting {}",
            status.code(),
            input.display()
        )));
    }

    tracing::info!("Conversion completed: {}", output.display());
    Ok(())
}

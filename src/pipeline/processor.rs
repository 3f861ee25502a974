//! Batch processor: route, convert, transcribe, and persist each file.
//!
//! Files are processed strictly sequentially. A failure on one file is
//! recorded in its outcome and never aborts the batch.

use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::SpeechEngine;
use crate::formats::{self, Route};
use crate::media;
use crate::models::{BatchSummary, FileOutcome, Language};
use crate::queue::FileEntry;

use super::errors::FileError;

/// Derive the transcript path for an input file.
///
/// The stem of the input replaces its extension with `.txt` inside the
/// output directory. Two inputs sharing a stem map to the same transcript
/// path; the later write wins (documented limitation).
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "transcript".to_string());
    output_dir.join(format!("{}.txt", stem))
}

/// Processor that runs ordered files through the engine one at a time.
pub struct BatchProcessor<'a, E: SpeechEngine> {
    engine: &'a E,
    language: Language,
    output_dir: PathBuf,
}

impl<'a, E: SpeechEngine> BatchProcessor<'a, E> {
    pub fn new(engine: &'a E, language: Language, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            engine,
            language,
            output_dir: output_dir.into(),
        }
    }

    /// Process a whole batch sequentially, collecting every outcome.
    pub fn process_batch(&self, entries: &[FileEntry]) -> BatchSummary {
        let mut summary = BatchSummary::new();

        for (i, entry) in entries.iter().enumerate() {
            tracing::info!(
                "Processing file {}/{}: {}",
                i + 1,
                entries.len(),
                entry.display_name()
            );
            summary.push(self.process_file(&entry.path));
        }

        summary
    }

    /// Process a single file: route by format, convert if needed,
    /// transcribe, and write the transcript.
    pub fn process_file(&self, input: &Path) -> FileOutcome {
        match formats::route(input) {
            Route::Unsupported => {
                tracing::warn!("Skipping unsupported file type: {}", input.display());
                FileOutcome::skipped(input, "unsupported file type")
            }
            Route::Direct => self.transcribe_and_write(input, input),
            Route::Convert => match media::ensure_mp3(input) {
                Ok(mp3_path) => self.transcribe_and_write(input, &mp3_path),
                Err(e) => {
                    let err = FileError::conversion(input.display().to_string(), e);
                    tracing::error!("{}", err);
                    FileOutcome::failed(input, err.to_string())
                }
            },
        }
    }

    /// Transcribe `audio` and write the text to the transcript path
    /// derived from `input`.
    fn transcribe_and_write(&self, input: &Path, audio: &Path) -> FileOutcome {
        let output = output_path_for(input, &self.output_dir);

        tracing::info!("Starting transcription of {}", audio.display());

        let text = match self.engine.transcribe(audio, self.language) {
            Ok(text) => text,
            Err(e) => {
                let err = FileError::transcription(audio.display().to_string(), e);
                tracing::error!("{}", err);
                return FileOutcome::failed(input, err.to_string());
            }
        };

        if let Err(e) = fs::write(&output, &text) {
            let err = FileError::write_transcript(output.display().to_string(), e);
            tracing::error!("{}", err);
            return FileOutcome::failed(input, err.to_string());
        }

        tracing::info!("Transcript written: {}", output.display());
        FileOutcome::transcribed(input, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineError, EngineResult};
    use crate::media::MediaError;
    use crate::models::FileStatus;
    use std::sync::Mutex;
    use tempfile::tempdir;

    /// Engine double: records the audio paths it sees and fails on request.
    struct MockEngine {
        seen: Mutex<Vec<PathBuf>>,
        fail_on: Option<&'static str>,
    }

    impl MockEngine {
        fn new() -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                fail_on: None,
            }
        }

        fn failing_on(stem: &'static str) -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                fail_on: Some(stem),
            }
        }

        fn seen_paths(&self) -> Vec<PathBuf> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl SpeechEngine for MockEngine {
        fn transcribe(&self, audio: &Path, _language: Language) -> EngineResult<String> {
            self.seen.lock().unwrap().push(audio.to_path_buf());
            if let Some(stem) = self.fail_on {
                if audio.file_stem().is_some_and(|s| s == stem) {
                    return Err(EngineError::Decode(MediaError::EmptyAudio(
                        audio.display().to_string(),
                    )));
                }
            }
            Ok(format!("transcript of {}", audio.display()))
        }
    }

    fn entry_for(path: &Path) -> FileEntry {
        FileEntry::from_path(path).unwrap()
    }

    #[test]
    fn derives_output_path_from_stem() {
        assert_eq!(
            output_path_for(Path::new("meeting.wav"), Path::new("/out")),
            PathBuf::from("/out/meeting.txt")
        );
        assert_eq!(
            output_path_for(Path::new("/in/deep/clip_(3).mkv"), Path::new("/out")),
            PathBuf::from("/out/clip_(3).txt")
        );
    }

    #[test]
    fn direct_file_is_transcribed_and_written() {
        let dir = tempdir().unwrap();
        let out = tempdir().unwrap();
        let input = dir.path().join("talk.wav");
        fs::write(&input, b"x").unwrap();

        let engine = MockEngine::new();
        let processor = BatchProcessor::new(&engine, Language::English, out.path());

        let outcome = processor.process_file(&input);
        assert_eq!(outcome.status, FileStatus::Transcribed);

        let transcript = out.path().join("talk.txt");
        assert_eq!(outcome.output, Some(transcript.clone()));
        let text = fs::read_to_string(transcript).unwrap();
        assert!(text.contains("talk.wav"));
    }

    #[test]
    fn unsupported_file_is_skipped_without_engine_call() {
        let out = tempdir().unwrap();
        let engine = MockEngine::new();
        let processor = BatchProcessor::new(&engine, Language::English, out.path());

        let outcome = processor.process_file(Path::new("/in/notes.txt"));
        assert_eq!(outcome.status, FileStatus::Skipped);
        assert!(engine.seen_paths().is_empty());
    }

    #[test]
    fn existing_mp3_sibling_is_transcribed_in_place_of_input() {
        let dir = tempdir().unwrap();
        let out = tempdir().unwrap();
        let input = dir.path().join("video.mkv");
        let sibling = dir.path().join("video.mp3");
        fs::write(&input, b"x").unwrap();
        fs::write(&sibling, b"x").unwrap();

        let engine = MockEngine::new();
        let processor = BatchProcessor::new(&engine, Language::English, out.path());

        let outcome = processor.process_file(&input);
        assert_eq!(outcome.status, FileStatus::Transcribed);
        // The engine saw the converted sibling, not the original container.
        assert_eq!(engine.seen_paths(), vec![sibling]);
        // The transcript name still comes from the original input stem.
        assert_eq!(outcome.output, Some(out.path().join("video.txt")));
    }

    #[test]
    fn failure_on_one_file_does_not_stop_the_batch() {
        let dir = tempdir().unwrap();
        let out = tempdir().unwrap();
        for name in ["a.wav", "bad.wav", "c.wav"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let engine = MockEngine::failing_on("bad");
        let processor = BatchProcessor::new(&engine, Language::English, out.path());

        let entries: Vec<FileEntry> = ["a.wav", "bad.wav", "c.wav"]
            .iter()
            .map(|n| entry_for(&dir.path().join(n)))
            .collect();

        let summary = processor.process_batch(&entries);
        assert_eq!(summary.outcomes.len(), 3);
        assert_eq!(summary.transcribed(), 2);
        assert_eq!(summary.failed(), 1);
        assert!(summary.has_failures());

        // All three were attempted, in order.
        let seen: Vec<String> = engine
            .seen_paths()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(seen, ["a.wav", "bad.wav", "c.wav"]);
    }

    #[test]
    fn shared_stem_overwrites_previous_transcript() {
        let dir = tempdir().unwrap();
        let out = tempdir().unwrap();
        let wav = dir.path().join("same.wav");
        let mp3 = dir.path().join("same.mp3");
        fs::write(&wav, b"x").unwrap();
        fs::write(&mp3, b"x").unwrap();

        let engine = MockEngine::new();
        let processor = BatchProcessor::new(&engine, Language::English, out.path());

        processor.process_file(&wav);
        processor.process_file(&mp3);

        // Second write wins; only one transcript exists.
        let text = fs::read_to_string(out.path().join("same.txt")).unwrap();
        assert!(text.contains("same.mp3"));
    }
}

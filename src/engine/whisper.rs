//! Whisper engine — wraps whisper.cpp via whisper-rs.

use std::path::Path;

use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::media;
use crate::models::{Device, Language, ModelTier};

use super::{EngineError, EngineResult, SpeechEngine};

/// Speech engine backed by a whisper.cpp model.
///
/// The model is loaded once at construction and reused for every file in
/// the batch; per-file inference runs on a fresh state.
pub struct WhisperEngine {
    ctx: WhisperContext,
}

impl WhisperEngine {
    /// Load the ggml model for `tier` from `models_dir`.
    ///
    /// Expects `models_dir/ggml-<tier>.bin` to exist; the model itself is
    /// not downloaded here.
    pub fn load(models_dir: &Path, tier: ModelTier, device: Device) -> EngineResult<Self> {
        let model_path = models_dir.join(tier.model_file());
        if !model_path.exists() {
            return Err(EngineError::ModelNotFound { path: model_path });
        }

        let path_str = model_path
            .to_str()
            .ok_or_else(|| EngineError::InvalidModelPath {
                path: model_path.clone(),
            })?;

        let mut params = WhisperContextParameters::default();
        params.use_gpu(device.is_gpu());

        let ctx = WhisperContext::new_with_params(path_str, params)?;

        Ok(Self { ctx })
    }
}

impl SpeechEngine for WhisperEngine {
    fn transcribe(&self, audio: &Path, language: Language) -> EngineResult<String> {
        let samples = media::decode_pcm(audio)?;

        let mut state = self.ctx.create_state()?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        params.set_language(Some(language.code()));
        params.set_translate(false);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        state.full(params, &samples)?;

        let n_segments = state.full_n_segments();
        let mut text = String::new();
        for i in 0..n_segments {
            if let Some(segment) = state.get_segment(i) {
                text.push_str(&segment.to_str_lossy()?);
            }
        }

        Ok(text)
    }
}

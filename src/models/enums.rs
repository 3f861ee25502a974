//! Core enums used throughout the application.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Compute device for the speech model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    /// Run inference on the CPU.
    #[default]
    Cpu,
    /// Run inference on the GPU (whisper.cpp must be built with GPU support).
    Gpu,
}

impl Device {
    pub fn is_gpu(&self) -> bool {
        matches!(self, Device::Gpu)
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Gpu => write!(f, "gpu"),
        }
    }
}

/// Whisper model size tier.
///
/// Larger tiers trade speed and memory for accuracy; see the whisper.cpp
/// repository for performance and requirement details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ModelTier {
    Tiny,
    #[default]
    Base,
    Small,
    Medium,
    LargeV2,
    LargeV3,
}

impl ModelTier {
    /// Get the canonical tier name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Base => "base",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::LargeV2 => "large-v2",
            Self::LargeV3 => "large-v3",
        }
    }

    /// Filename of the ggml model file for this tier.
    pub fn model_file(&self) -> String {
        format!("ggml-{}.bin", self.name())
    }

    /// Get all available tiers.
    pub fn all() -> &'static [ModelTier] {
        &[
            Self::Tiny,
            Self::Base,
            Self::Small,
            Self::Medium,
            Self::LargeV2,
            Self::LargeV3,
        ]
    }
}

impl std::fmt::Display for ModelTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Criterion for ordering files in a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OrderCriterion {
    /// Creation time, oldest first.
    CreatedAsc,
    /// Creation time, newest first.
    CreatedDesc,
    /// Modification time, oldest first.
    ModifiedAsc,
    /// Modification time, newest first.
    ModifiedDesc,
    /// Parenthesized number in the filename (e.g. `take_(3).wav`), ascending.
    /// Files without a number sort last.
    Sequence,
    /// Directory enumeration order.
    #[default]
    Unordered,
}

impl OrderCriterion {
    /// Get the display name for this criterion.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreatedAsc => "created (oldest first)",
            Self::CreatedDesc => "created (newest first)",
            Self::ModifiedAsc => "modified (oldest first)",
            Self::ModifiedDesc => "modified (newest first)",
            Self::Sequence => "filename sequence number",
            Self::Unordered => "unordered",
        }
    }

    /// Get all available criteria.
    pub fn all() -> &'static [OrderCriterion] {
        &[
            Self::CreatedAsc,
            Self::CreatedDesc,
            Self::ModifiedAsc,
            Self::ModifiedDesc,
            Self::Sequence,
            Self::Unordered,
        ]
    }
}

impl std::fmt::Display for OrderCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_tier_serializes_kebab_case() {
        let json = serde_json::to_string(&ModelTier::LargeV2).unwrap();
        assert_eq!(json, "\"large-v2\"");
    }

    #[test]
    fn model_tier_file_names() {
        assert_eq!(ModelTier::Base.model_file(), "ggml-base.bin");
        assert_eq!(ModelTier::LargeV3.model_file(), "ggml-large-v3.bin");
    }

    #[test]
    fn device_deserializes_lowercase() {
        let device: Device = serde_json::from_str("\"gpu\"").unwrap();
        assert_eq!(device, Device::Gpu);
        assert!(device.is_gpu());
    }

    #[test]
    fn order_criterion_round_trips() {
        let json = serde_json::to_string(&OrderCriterion::CreatedDesc).unwrap();
        assert_eq!(json, "\"created-desc\"");
        let parsed: OrderCriterion = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, OrderCriterion::CreatedDesc);
    }

    #[test]
    fn six_order_criteria() {
        assert_eq!(OrderCriterion::all().len(), 6);
    }
}

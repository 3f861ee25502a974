//! Configuration management.
//!
//! Settings are stored in TOML with section-level atomic updates.

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, DefaultSettings, PathSettings, Settings};

//! Configuration file (`stepviz.toml`) parsing.
//!
//! Every field has a default, so an empty file and a missing file behave the
//! same. Command-line flags override whatever is loaded here.

use crate::interpreter::constants::INITIAL_FRAME;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub playback: PlaybackConfig,
}

/// The `[engine]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fail the step after this many executed lines. Unbounded when absent.
    pub max_steps: Option<usize>,

    /// Label of the single call-stack frame.
    pub initial_frame: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_steps: None,
            initial_frame: INITIAL_FRAME.to_string(),
        }
    }
}

/// The `[playback]` section, used by the interactive runner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Delay between automatic steps in play mode.
    pub interval_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load a configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

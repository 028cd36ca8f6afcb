//! File-based configuration.
//!
//! A TOML file can set generation defaults and extend the analyzer
//! tables. Every section is optional.

use crate::analysis::AnalysisConfig;
use crate::generation::{CharacterClass, GenerationSettings, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("default length {0} out of range (must be 4-64)")]
    InvalidLength(usize),
    #[error("default classes must not be empty")]
    NoDefaultClasses,
    #[error("guess rates must be finite and positive")]
    InvalidGuessRate,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub generation: GenerationDefaults,
    #[serde(default)]
    pub analysis: AnalysisOverrides,
}

/// Defaults applied to generation requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationDefaults {
    /// Password length when none is requested.
    pub length: usize,
    /// Classes enabled unless switched off.
    pub classes: Vec<CharacterClass>,
    /// Custom symbols added to every pool.
    pub custom_symbols: Option<String>,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: CharacterClass::ALL.to_vec(),
            custom_symbols: None,
        }
    }
}

impl GenerationDefaults {
    /// Builds settings from these defaults with no seed material.
    pub fn to_settings(&self) -> GenerationSettings {
        GenerationSettings {
            word: None,
            number_seed: None,
            custom_symbols: self.custom_symbols.clone(),
            length: self.length,
            classes: self.classes.iter().copied().collect(),
        }
    }
}

/// Additions and rate overrides for the analyzer tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOverrides {
    /// Words penalized in addition to the built-in list.
    pub extra_common_words: Vec<String>,
    /// Sequences penalized in addition to the built-in list.
    pub extra_keyboard_sequences: Vec<String>,
    /// Online attacker guesses per second.
    pub online_guesses_per_second: f64,
    /// Offline attacker guesses per second.
    pub offline_guesses_per_second: f64,
}

impl Default for AnalysisOverrides {
    fn default() -> Self {
        let base = AnalysisConfig::default();
        Self {
            extra_common_words: Vec::new(),
            extra_keyboard_sequences: Vec::new(),
            online_guesses_per_second: base.online_guesses_per_second,
            offline_guesses_per_second: base.offline_guesses_per_second,
        }
    }
}

impl AnalysisOverrides {
    /// Builds the analyzer tables: built-ins plus these additions.
    pub fn to_analysis_config(&self) -> AnalysisConfig {
        let mut config = AnalysisConfig {
            online_guesses_per_second: self.online_guesses_per_second,
            offline_guesses_per_second: self.offline_guesses_per_second,
            ..Default::default()
        };
        config.extend(&self.extra_common_words, &self.extra_keyboard_sequences);
        config
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let length = self.generation.length;
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(ConfigError::InvalidLength(length));
        }
        if self.generation.classes.is_empty() {
            return Err(ConfigError::NoDefaultClasses);
        }
        if !self.analysis.to_analysis_config().rates_valid() {
            return Err(ConfigError::InvalidGuessRate);
        }
        Ok(())
    }
}

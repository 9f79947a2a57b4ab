//! Password generation configuration.
//!
//! A [`CharacterClassConfig`] describes which character classes a
//! password draws from and how long it must be. It is built fresh per
//! call by the caller; the generator re-validates it before use.

use crate::charset;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Character classes and length for one generated password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterClassConfig {
    /// Include `A-Z`.
    pub uppercase: bool,
    /// Include `a-z`.
    pub lowercase: bool,
    /// Include `0-9`.
    pub numbers: bool,
    /// Include punctuation from [`charset::SYMBOLS`].
    pub symbols: bool,
    /// Drop look-alike characters (`i l 1 L o 0 O`) from every pool.
    pub exclude_similar: bool,
    /// Extra characters added to the combined pool. Never guaranteed.
    pub custom_characters: Option<String>,
    /// Exact number of characters to produce.
    pub length: usize,
}

impl Default for CharacterClassConfig {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
            exclude_similar: false,
            custom_characters: None,
            length: 16,
        }
    }
}

impl CharacterClassConfig {
    /// Creates the default configuration with a different length.
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    /// Creates a configuration with every class disabled.
    ///
    /// Useful as a starting point for custom-character-only passwords.
    pub fn empty(length: usize) -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
            exclude_similar: false,
            custom_characters: None,
            length,
        }
    }

    /// Number of enabled classes, each of which reserves one position.
    pub fn enabled_class_count(&self) -> usize {
        [self.uppercase, self.lowercase, self.numbers, self.symbols]
            .iter()
            .filter(|&&enabled| enabled)
            .count()
    }

    /// Custom characters after similar-character filtering, if requested.
    pub(crate) fn effective_custom(&self) -> String {
        match self.custom_characters.as_deref() {
            Some(custom) if self.exclude_similar => charset::filter_similar(custom),
            Some(custom) => custom.to_string(),
            None => String::new(),
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length == 0 {
            return Err(ConfigError::InvalidLength);
        }

        let classes = self.enabled_class_count();
        if classes == 0 && self.effective_custom().is_empty() {
            return Err(ConfigError::NoCharacterSource);
        }

        // One guaranteed character per class must fit
        if self.length < classes {
            return Err(ConfigError::LengthTooShort {
                length: self.length,
                required: classes,
            });
        }

        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// All classes disabled and no usable custom characters.
    #[error("no character source selected")]
    NoCharacterSource,
    /// Requested length is zero.
    #[error("password length must be a positive integer")]
    InvalidLength,
    /// Length cannot hold one guaranteed character per enabled class.
    #[error("length {length} cannot fit one character from each of {required} enabled classes")]
    LengthTooShort {
        /// Requested length.
        length: usize,
        /// Number of enabled classes.
        required: usize,
    },
    /// Passphrase word count is zero.
    #[error("word count must be a positive integer")]
    InvalidWordCount,
    /// Config file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// Config file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Password generation defaults.
    #[serde(default)]
    pub generator: CharacterClassConfig,
    /// Passphrase defaults.
    #[serde(default)]
    pub memorable: MemorableConfig,
    /// Output options.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Memorable passphrase configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorableConfig {
    /// Number of words joined by hyphens.
    pub word_count: usize,
}

impl Default for MemorableConfig {
    fn default() -> Self {
        Self {
            word_count: super::DEFAULT_WORD_COUNT,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// How many passwords to print per run.
    pub count: usize,
    /// Print a strength report next to each password.
    pub analyze: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            count: 1,
            analyze: false,
        }
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.generator.validate()?;
        if config.memorable.word_count == 0 {
            return Err(ConfigError::InvalidWordCount);
        }
        Ok(config)
    }
}

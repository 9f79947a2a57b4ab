//! Password and passphrase generation.
//!
//! This module turns a [`CharacterClassConfig`] into a password of the
//! exact requested length, with at least one character from every
//! enabled class, and builds word-based memorable passphrases.

mod config;
mod password;

pub use config::{CharacterClassConfig, ConfigError, FileConfig, MemorableConfig, OutputConfig};
pub use password::{
    random_char, shuffle, GeneratorError, PasswordGenerator, DEFAULT_WORD_COUNT,
};

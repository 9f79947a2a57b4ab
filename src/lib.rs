//! Password Generation and Strength Analysis Library
//!
//! Builds passwords under character-class and length constraints,
//! produces word-based memorable passphrases, and scores arbitrary
//! strings with a bounded strength heuristic.
//!
//! # Architecture
//!
//! Two independent components share only constant tables:
//!
//! ```text
//! random ──► generator ──► password ──(optional)──► strength
//!              ▲                                       │
//!           charset                                 report
//! ```
//!
//! # Design Principles
//!
//! - **Exact length**: a generated password is never shorter or longer
//!   than requested; configurations that cannot fit are rejected
//! - **Guaranteed classes**: every enabled class appears at least once
//! - **Unbiased draws**: all indices come from a [`RandomSource`] with
//!   no modulo bias
//! - **Heuristic scoring**: strength is a rule-based score, not entropy
//!
//! # Example
//!
//! ```
//! use passforge::{analyze, CharacterClassConfig, PasswordGenerator};
//!
//! let mut generator = PasswordGenerator::new();
//!
//! let config = CharacterClassConfig {
//!     length: 20,
//!     exclude_similar: true,
//!     ..Default::default()
//! };
//! let password = generator.generate(&config).unwrap();
//! assert_eq!(password.chars().count(), 20);
//!
//! let phrase = generator.generate_memorable(4).unwrap();
//! assert_eq!(phrase.matches('-').count(), 3);
//!
//! let report = analyze(&password);
//! println!("{} ({}): {:?}", report.score, report.level, report.feedback);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod charset;
pub mod generator;
pub mod metrics;
pub mod random;
pub mod strength;

// Re-export commonly used types at crate root
pub use generator::{
    CharacterClassConfig, ConfigError, FileConfig, GeneratorError, PasswordGenerator,
    DEFAULT_WORD_COUNT,
};
pub use random::{OsRandom, RandomSource, ScriptedRandom, SeededRandom};
pub use strength::{analyze, StrengthAnalyzer, StrengthLevel, StrengthReport};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Password and passphrase construction.
//!
//! # Algorithm
//!
//! ```text
//! class pools ──► one guaranteed char per enabled class
//!      │                         │
//!      └─► combined pool ──► fill remaining positions
//!                                │
//!                  guaranteed + filled ──► Fisher–Yates shuffle
//! ```
//!
//! Guarantees are drawn in a fixed class order (uppercase, lowercase,
//! numbers, symbols) and then shuffled so they do not sit predictably
//! at the front.

use super::config::{CharacterClassConfig, ConfigError};
use crate::charset::{self, MEMORABLE_SYMBOLS, MEMORABLE_WORDS};
use crate::random::{OsRandom, RandomSource};
use thiserror::Error;

/// Default number of words in a memorable passphrase.
pub const DEFAULT_WORD_COUNT: usize = 4;

/// Errors that can occur while generating a password.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The configuration was rejected.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// A draw was attempted from an empty pool.
    #[error("cannot draw a character from an empty charset")]
    EmptyCharset,
}

/// Builds passwords and passphrases from a [`RandomSource`].
///
/// The generator holds no state besides its random source, so a
/// separate instance per thread is all that concurrent use requires.
pub struct PasswordGenerator<R: RandomSource = OsRandom> {
    rng: R,
}

impl PasswordGenerator<OsRandom> {
    /// Creates a generator backed by the OS CSPRNG.
    pub fn new() -> Self {
        Self::with_source(OsRandom)
    }
}

impl Default for PasswordGenerator<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    /// Creates a generator that draws from the given source.
    pub fn with_source(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the underlying random source.
    pub fn source(&self) -> &R {
        &self.rng
    }

    /// Consumes the generator and returns its random source.
    pub fn into_source(self) -> R {
        self.rng
    }

    /// Generates one password satisfying `config`.
    ///
    /// The result always has exactly `config.length` characters and
    /// contains at least one character from every enabled class.
    pub fn generate(&mut self, config: &CharacterClassConfig) -> Result<String, GeneratorError> {
        config.validate()?;

        let pools = class_pools(config);
        let mut combined: Vec<char> = pools.iter().flatten().copied().collect();
        combined.extend(config.effective_custom().chars());

        let mut password = Vec::with_capacity(config.length);
        for pool in &pools {
            password.push(random_char(&mut self.rng, pool)?);
        }
        let guaranteed = password.len();

        while password.len() < config.length {
            password.push(random_char(&mut self.rng, &combined)?);
        }

        shuffle(&mut self.rng, &mut password);

        tracing::debug!(
            length = config.length,
            guaranteed,
            pool_size = combined.len(),
            exclude_similar = config.exclude_similar,
            "Password generated"
        );

        Ok(password.into_iter().collect())
    }

    /// Generates `count` independent passwords.
    ///
    /// Each password satisfies the single-password guarantees on its
    /// own. The first failure aborts the whole batch.
    pub fn generate_many(
        &mut self,
        config: &CharacterClassConfig,
        count: usize,
    ) -> Result<Vec<String>, GeneratorError> {
        (0..count).map(|_| self.generate(config)).collect()
    }

    /// Generates a passphrase like `Tiger-Ocean-Kettle-Meadow42#`.
    ///
    /// Words are drawn with replacement, joined by hyphens, then
    /// followed by a two-digit number in `[10, 99]` and one symbol.
    pub fn generate_memorable(&mut self, word_count: usize) -> Result<String, GeneratorError> {
        if word_count == 0 {
            return Err(ConfigError::InvalidWordCount.into());
        }

        let words: Vec<&str> = (0..word_count)
            .map(|_| MEMORABLE_WORDS[self.rng.next_index(MEMORABLE_WORDS.len())])
            .collect();
        let number = 10 + self.rng.next_index(90);
        let symbols: Vec<char> = MEMORABLE_SYMBOLS.chars().collect();
        let symbol = random_char(&mut self.rng, &symbols)?;

        tracing::debug!(word_count, "Memorable passphrase generated");

        Ok(format!("{}{}{}", words.join("-"), number, symbol))
    }
}

/// Per-class pools for every enabled class, in guarantee order.
fn class_pools(config: &CharacterClassConfig) -> Vec<Vec<char>> {
    [
        (config.uppercase, charset::UPPERCASE),
        (config.lowercase, charset::LOWERCASE),
        (config.numbers, charset::NUMBERS),
        (config.symbols, charset::SYMBOLS),
    ]
    .into_iter()
    .filter(|(enabled, _)| *enabled)
    .map(|(_, set)| {
        if config.exclude_similar {
            charset::filter_similar(set).chars().collect()
        } else {
            set.chars().collect()
        }
    })
    .collect()
}

/// Returns one character from `pool` at a uniformly random index.
pub fn random_char<R: RandomSource + ?Sized>(
    rng: &mut R,
    pool: &[char],
) -> Result<char, GeneratorError> {
    if pool.is_empty() {
        return Err(GeneratorError::EmptyCharset);
    }
    Ok(pool[rng.next_index(pool.len())])
}

/// Fisher–Yates shuffle: for `i` from the last index down to 1, swap
/// position `i` with a uniformly random position in `[0, i]`.
pub fn shuffle<T, R: RandomSource + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, SeededRandom};

    fn seeded() -> PasswordGenerator<SeededRandom> {
        PasswordGenerator::with_source(SeededRandom::from_seed([0x5Au8; 32]))
    }

    #[test]
    fn test_guarantees_drawn_in_class_order() {
        // Four zero draws for guarantees, then shuffle indices equal to i
        let rng = ScriptedRandom::new(vec![0, 0, 0, 0, 3, 2, 1]);
        let mut generator = PasswordGenerator::with_source(rng);

        let password = generator
            .generate(&CharacterClassConfig::with_length(4))
            .unwrap();
        assert_eq!(password, "Aa0!");
    }

    #[test]
    fn test_shuffle_moves_guarantees() {
        // All-zero shuffle indices rotate the guaranteed prefix
        let rng = ScriptedRandom::new(vec![0]);
        let mut generator = PasswordGenerator::with_source(rng);

        let password = generator
            .generate(&CharacterClassConfig::with_length(4))
            .unwrap();
        assert_eq!(password, "a0!A");
    }

    #[test]
    fn test_fill_draws_from_combined_pool() {
        let mut config = CharacterClassConfig::empty(3);
        config.uppercase = true;
        config.numbers = true;

        // Combined pool is A-Z followed by 0-9, so index 27 is '1'
        let rng = ScriptedRandom::new(vec![0, 0, 27, 2, 1]);
        let mut generator = PasswordGenerator::with_source(rng);

        assert_eq!(generator.generate(&config).unwrap(), "A01");
        assert_eq!(generator.source().position(), 5);
    }

    #[test]
    fn test_custom_characters_have_no_guaranteed_slot() {
        let mut config = CharacterClassConfig::empty(3);
        config.custom_characters = Some("xyz".to_string());

        // Three fill draws, then identity shuffle
        let rng = ScriptedRandom::new(vec![0, 1, 2, 2, 1]);
        let mut generator = PasswordGenerator::with_source(rng);

        assert_eq!(generator.generate(&config).unwrap(), "xyz");
    }

    #[test]
    fn test_exclude_similar_filters_class_pool() {
        let mut config = CharacterClassConfig::empty(1);
        config.uppercase = true;
        config.exclude_similar = true;

        // Filtered uppercase skips L, so index 11 lands on 'M'
        let rng = ScriptedRandom::new(vec![11]);
        let mut generator = PasswordGenerator::with_source(rng);

        assert_eq!(generator.generate(&config).unwrap(), "M");
    }

    #[test]
    fn test_length_matches_request() {
        let mut generator = seeded();
        for length in 4..64 {
            let password = generator
                .generate(&CharacterClassConfig::with_length(length))
                .unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn test_every_enabled_class_present() {
        let mut generator = seeded();
        let config = CharacterClassConfig::with_length(4);

        for _ in 0..200 {
            let password = generator.generate(&config).unwrap();
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(password.chars().any(|c| charset::SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn test_exclude_similar_applies_to_custom() {
        let mut config = CharacterClassConfig::with_length(32);
        config.exclude_similar = true;
        config.custom_characters = Some("l1O0xyz".to_string());

        let mut generator = seeded();
        for _ in 0..50 {
            let password = generator.generate(&config).unwrap();
            assert!(!password.chars().any(|c| charset::SIMILAR.contains(c)));
        }
    }

    #[test]
    fn test_too_short_rejected() {
        let mut generator = seeded();
        let result = generator.generate(&CharacterClassConfig::with_length(2));
        assert_eq!(
            result,
            Err(GeneratorError::Config(ConfigError::LengthTooShort {
                length: 2,
                required: 4
            }))
        );
    }

    #[test]
    fn test_no_source_rejected() {
        let mut generator = seeded();
        let result = generator.generate(&CharacterClassConfig::empty(8));
        assert_eq!(
            result,
            Err(GeneratorError::Config(ConfigError::NoCharacterSource))
        );
    }

    #[test]
    fn test_generate_many_counts() {
        let mut generator = seeded();
        let config = CharacterClassConfig::default();

        assert!(generator.generate_many(&config, 0).unwrap().is_empty());

        let batch = generator.generate_many(&config, 5).unwrap();
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|p| p.len() == 16));
    }

    #[test]
    fn test_one_draw_per_character() {
        // Four guarantees, four fills, seven shuffle swaps
        let mut generator = seeded();
        generator
            .generate(&CharacterClassConfig::with_length(8))
            .unwrap();

        assert_eq!(generator.into_source().draws(), 4 + 4 + 7);
    }

    #[test]
    fn test_generate_many_fails_whole_batch() {
        let mut generator = seeded();
        let result = generator.generate_many(&CharacterClassConfig::empty(8), 3);
        assert!(result.is_err());
    }

    #[test]
    fn test_memorable_scripted() {
        let rng = ScriptedRandom::new(vec![0, 1, 2, 3, 0, 4]);
        let mut generator = PasswordGenerator::with_source(rng);

        assert_eq!(
            generator.generate_memorable(4).unwrap(),
            "Apple-Beach-Castle-Dragon10%"
        );
    }

    #[test]
    fn test_memorable_upper_number_bound() {
        let rng = ScriptedRandom::new(vec![23, 89, 0]);
        let mut generator = PasswordGenerator::with_source(rng);

        assert_eq!(generator.generate_memorable(1).unwrap(), "Zephyr99!");
    }

    #[test]
    fn test_memorable_zero_words_rejected() {
        let mut generator = seeded();
        assert_eq!(
            generator.generate_memorable(0),
            Err(GeneratorError::Config(ConfigError::InvalidWordCount))
        );
    }

    #[test]
    fn test_random_char_empty_pool() {
        let mut rng = SeededRandom::from_seed([0u8; 32]);
        assert_eq!(random_char(&mut rng, &[]), Err(GeneratorError::EmptyCharset));
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let mut rng = SeededRandom::from_seed([0x11u8; 32]);
        let original: Vec<char> = "aabbccddeeff0123!!".chars().collect();
        let mut shuffled = original.clone();
        shuffle(&mut rng, &mut shuffled);

        let mut a = original.clone();
        let mut b = shuffled.clone();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_short_inputs() {
        let mut rng = ScriptedRandom::new(vec![0]);
        let mut empty: [char; 0] = [];
        shuffle(&mut rng, &mut empty);

        let mut single = ['x'];
        shuffle(&mut rng, &mut single);
        assert_eq!(single, ['x']);
        assert_eq!(rng.position(), 0);
    }
}

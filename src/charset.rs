//! Fixed character tables.
//!
//! These are process-wide constants; nothing in the crate mutates them.

/// ASCII uppercase letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII lowercase letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// ASCII digits.
pub const NUMBERS: &str = "0123456789";

/// Punctuation used for the symbol class.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that are easy to confuse with one another in most fonts.
pub const SIMILAR: &str = "il1Lo0O";

/// Word list for memorable passphrases.
pub const MEMORABLE_WORDS: [&str; 24] = [
    "Apple", "Beach", "Castle", "Dragon", "Eagle", "Forest", "Garden", "Harbor",
    "Island", "Jungle", "Kettle", "Lantern", "Meadow", "Needle", "Ocean", "Pepper",
    "Quartz", "River", "Sunset", "Tiger", "Valley", "Walnut", "Window", "Zephyr",
];

/// Symbols appended to the end of a memorable passphrase.
pub const MEMORABLE_SYMBOLS: &str = "!@#$%";

/// Returns `charset` with every character from [`SIMILAR`] removed.
///
/// Order is preserved; a charset with no similar characters comes back
/// unchanged.
pub fn filter_similar(charset: &str) -> String {
    charset.chars().filter(|c| !SIMILAR.contains(*c)).collect()
}

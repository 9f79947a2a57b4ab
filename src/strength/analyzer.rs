//! Heuristic password scoring.
//!
//! The score is a bounded sum of rule contributions, not an entropy
//! estimate:
//!
//! | Rule             | Contribution                          |
//! |------------------|---------------------------------------|
//! | Length           | +25 at 12+ chars, +15 at 8+           |
//! | Variety          | +15 per class present (4 classes)     |
//! | Repetition       | −10 per run of 3+ identical chars     |
//! | Common pattern   | −20 once if any known pattern appears |
//!
//! The total is clamped to `[0, 100]`.

use super::report::{StrengthLevel, StrengthReport};

/// Feedback messages, in the order they can appear in a report.
pub mod feedback {
    /// Input has fewer than 8 characters.
    pub const TOO_SHORT: &str = "Password should be at least 8 characters long";
    /// No ASCII uppercase letter.
    pub const ADD_UPPERCASE: &str = "Add uppercase letters";
    /// No ASCII lowercase letter.
    pub const ADD_LOWERCASE: &str = "Add lowercase letters";
    /// No digit.
    pub const ADD_NUMBERS: &str = "Add numbers";
    /// No non-alphanumeric character.
    pub const ADD_SYMBOLS: &str = "Add symbols";
    /// A run of 3+ identical characters.
    pub const REPEATED: &str = "Avoid repeated characters";
    /// Contains one of [`super::COMMON_PATTERNS`].
    pub const COMMON_PATTERN: &str =
        "Avoid common patterns like '123', 'abc', 'password' or 'qwerty'";
    /// Given when no other rule fired.
    pub const EXCELLENT: &str = "Excellent password!";
}

/// Substrings that mark a password as following a common pattern.
pub const COMMON_PATTERNS: [&str; 4] = ["123", "abc", "password", "qwerty"];

const LONG_LENGTH: usize = 12;
const MIN_LENGTH: usize = 8;
const LONG_SCORE: i32 = 25;
const MIN_LENGTH_SCORE: i32 = 15;
const CLASS_SCORE: i32 = 15;
const REPEAT_PENALTY: i32 = 10;
const PATTERN_PENALTY: i32 = 20;
const MIN_RUN: usize = 3;

/// Stateless analyzer; see [`analyze`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StrengthAnalyzer;

impl StrengthAnalyzer {
    /// Creates an analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Scores `password`. Equivalent to the free function [`analyze`].
    pub fn analyze(&self, password: &str) -> StrengthReport {
        analyze(password)
    }
}

/// Scores a password and explains what would improve it.
///
/// Pure: the same input always yields the same report.
pub fn analyze(password: &str) -> StrengthReport {
    let mut score: i32 = 0;
    let mut messages: Vec<&'static str> = Vec::new();

    let length = password.chars().count();
    if length >= LONG_LENGTH {
        score += LONG_SCORE;
    } else if length >= MIN_LENGTH {
        score += MIN_LENGTH_SCORE;
    } else {
        messages.push(feedback::TOO_SHORT);
    }

    let classes = [
        (password.chars().any(|c| c.is_ascii_uppercase()), feedback::ADD_UPPERCASE),
        (password.chars().any(|c| c.is_ascii_lowercase()), feedback::ADD_LOWERCASE),
        (password.chars().any(|c| c.is_ascii_digit()), feedback::ADD_NUMBERS),
        (password.chars().any(|c| !c.is_ascii_alphanumeric()), feedback::ADD_SYMBOLS),
    ];
    for (present, message) in classes {
        if present {
            score += CLASS_SCORE;
        } else {
            messages.push(message);
        }
    }

    let runs = repeated_runs(password);
    if runs > 0 {
        score -= REPEAT_PENALTY * runs as i32;
        messages.push(feedback::REPEATED);
    }

    let has_pattern = contains_common_pattern(password);
    if has_pattern {
        score -= PATTERN_PENALTY;
        messages.push(feedback::COMMON_PATTERN);
    }

    if messages.is_empty() {
        messages.push(feedback::EXCELLENT);
    }

    let score = score.clamp(0, 100) as u8;
    let level = StrengthLevel::from_score(score);

    tracing::trace!(
        length,
        repeated_runs = runs,
        common_pattern = has_pattern,
        score,
        level = %level,
        "Password analyzed"
    );

    StrengthReport {
        score,
        level,
        feedback: messages.into_iter().map(String::from).collect(),
    }
}

/// Counts maximal runs of at least three identical consecutive chars.
fn repeated_runs(password: &str) -> usize {
    let mut runs = 0;
    let mut chars = password.chars().peekable();

    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.next_if_eq(&c).is_some() {
            run += 1;
        }
        if run >= MIN_RUN {
            runs += 1;
        }
    }

    runs
}

fn contains_common_pattern(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PATTERNS.iter().any(|pattern| lowered.contains(pattern))
}

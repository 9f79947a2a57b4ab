//! Password strength analysis.
//!
//! Scores arbitrary strings with a bounded heuristic and produces
//! ordered, human-readable feedback. These are rules of thumb, not a
//! formal entropy estimate.

mod analyzer;
mod report;

pub use analyzer::{analyze, feedback, StrengthAnalyzer, COMMON_PATTERNS};
pub use report::{StrengthLevel, StrengthReport};

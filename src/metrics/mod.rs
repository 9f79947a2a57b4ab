//! Prometheus metrics for generation and analysis activity.
//!
//! Metrics are collected in-process and can be rendered in the
//! Prometheus text format with [`MetricsRegistry::encode`]. Nothing is
//! served over the network; callers decide where the text goes.
//!
//! # Metrics Exposed
//!
//! - `passforge_passwords_generated_total` - Passwords generated
//! - `passforge_passphrases_generated_total` - Memorable passphrases generated
//! - `passforge_generation_failures_total` - Rejected generation requests
//! - `passforge_last_password_length` - Length of the last generated password
//! - `passforge_analyses_total{level}` - Strength analyses by resulting level
//! - `passforge_last_strength_score` - Score of the last analysis
//!
//! # Example
//!
//! ```
//! use passforge::metrics::MetricsRegistry;
//! use passforge::strength::analyze;
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//! registry.record_passwords(1, 16);
//! registry.record_analysis(&analyze("Correct-Horse-42!"));
//!
//! let text = registry.encode().unwrap();
//! assert!(text.contains("passforge_passwords_generated_total 1"));
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry};

//! Metrics collection and registry.

use crate::strength::{StrengthLevel, StrengthReport};
use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Registration or encoding failed.
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// Prometheus metrics registry for generation and analysis activity.
pub struct MetricsRegistry {
    registry: Registry,

    // Generation metrics
    passwords_generated: IntCounter,
    passphrases_generated: IntCounter,
    generation_failures: IntCounter,
    last_password_length: IntGauge,

    // Analysis metrics
    analyses_total: IntCounterVec,
    last_strength_score: IntGauge,
}

impl MetricsRegistry {
    /// Creates a new registry with all metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        // Generation metrics
        let passwords_generated = IntCounter::new(
            "passforge_passwords_generated_total",
            "Total number of passwords generated",
        )?;
        let passphrases_generated = IntCounter::new(
            "passforge_passphrases_generated_total",
            "Total number of memorable passphrases generated",
        )?;
        let generation_failures = IntCounter::new(
            "passforge_generation_failures_total",
            "Total number of rejected generation requests",
        )?;
        let last_password_length = IntGauge::new(
            "passforge_last_password_length",
            "Length of the most recently generated password",
        )?;

        // Analysis metrics
        let analyses_total = IntCounterVec::new(
            Opts::new(
                "passforge_analyses_total",
                "Total number of strength analyses by resulting level",
            ),
            &["level"],
        )?;
        let last_strength_score = IntGauge::new(
            "passforge_last_strength_score",
            "Score of the most recent strength analysis",
        )?;

        registry.register(Box::new(passwords_generated.clone()))?;
        registry.register(Box::new(passphrases_generated.clone()))?;
        registry.register(Box::new(generation_failures.clone()))?;
        registry.register(Box::new(last_password_length.clone()))?;
        registry.register(Box::new(analyses_total.clone()))?;
        registry.register(Box::new(last_strength_score.clone()))?;

        // Touch every level so each series is exported from the start
        for level in StrengthLevel::ALL {
            analyses_total.with_label_values(&[level.label()]);
        }

        Ok(Self {
            registry,
            passwords_generated,
            passphrases_generated,
            generation_failures,
            last_password_length,
            analyses_total,
            last_strength_score,
        })
    }

    /// Records a batch of generated passwords of the given length.
    pub fn record_passwords(&self, count: usize, length: usize) {
        self.passwords_generated.inc_by(count as u64);
        if count > 0 {
            self.last_password_length.set(length as i64);
        }
    }

    /// Records one generated passphrase.
    pub fn record_passphrase(&self) {
        self.passphrases_generated.inc();
    }

    /// Records a rejected generation request.
    pub fn record_failure(&self) {
        self.generation_failures.inc();
    }

    /// Records the outcome of one strength analysis.
    pub fn record_analysis(&self, report: &StrengthReport) {
        self.analyses_total
            .with_label_values(&[report.level.label()])
            .inc();
        self.last_strength_score.set(i64::from(report.score));
    }

    /// Returns the underlying Prometheus registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

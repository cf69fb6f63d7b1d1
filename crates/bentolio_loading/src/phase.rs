//! Sequencer configuration
//!
//! Phases carry strictly increasing thresholds ending at 100; each
//! phase owns the progress range up to its threshold.

use thiserror::Error;

/// Configuration problems caught at sequencer construction
#[derive(Debug, Error)]
pub enum SequencerError {
    #[error("phase list is empty")]
    EmptyPhases,

    #[error("phase thresholds must be strictly increasing (phase {0})")]
    NonIncreasingThreshold(usize),

    #[error("final phase threshold must be 100, got {0}")]
    BadFinalThreshold(f32),

    #[error("jitter must be non-negative, got {0}")]
    NegativeJitter(f32),

    #[error("tick interval must be positive, got {0}")]
    NonPositiveTickInterval(f32),

    #[error("base increment must be positive, got {0}")]
    NonPositiveIncrement(f32),
}

/// One discrete stage of the simulated load
#[derive(Clone, Debug)]
pub struct PhaseConfig {
    /// Progress value at which this phase ends
    pub threshold: f32,
    /// User-facing phase caption
    pub label: String,
}

impl PhaseConfig {
    pub fn new(threshold: f32, label: impl Into<String>) -> Self {
        Self {
            threshold,
            label: label.into(),
        }
    }
}

/// Full sequencer configuration
#[derive(Clone, Debug)]
pub struct SequencerConfig {
    /// Ordered phases; the last threshold must be 100
    pub phases: Vec<PhaseConfig>,
    /// Fixed interval between progress ticks
    pub tick_interval_ms: f32,
    /// Progress added every tick before jitter
    pub base_increment: f32,
    /// Upper bound for the additive per-tick jitter (never negative)
    pub jitter_max: f32,
    /// Delay after reaching 100 before `is_loaded` latches
    pub settle_delay_ms: f32,
    /// Further delay before `show_main` latches
    pub reveal_delay_ms: f32,
}

impl SequencerConfig {
    /// Check phase ordering and jitter sign
    pub fn validate(&self) -> Result<(), SequencerError> {
        if self.phases.is_empty() {
            return Err(SequencerError::EmptyPhases);
        }
        let mut prev = 0.0;
        for (i, phase) in self.phases.iter().enumerate() {
            if phase.threshold <= prev {
                return Err(SequencerError::NonIncreasingThreshold(i));
            }
            prev = phase.threshold;
        }
        let last = self.phases.last().expect("non-empty").threshold;
        if last != 100.0 {
            return Err(SequencerError::BadFinalThreshold(last));
        }
        if self.jitter_max < 0.0 {
            return Err(SequencerError::NegativeJitter(self.jitter_max));
        }
        if self.tick_interval_ms <= 0.0 {
            return Err(SequencerError::NonPositiveTickInterval(self.tick_interval_ms));
        }
        // Jitter alone must not be load-bearing: without a positive base
        // increment a zero-jitter config would tick forever at 0.
        if self.base_increment <= 0.0 {
            return Err(SequencerError::NonPositiveIncrement(self.base_increment));
        }
        Ok(())
    }
}

impl Default for SequencerConfig {
    /// Timings matched to the original loading screen
    fn default() -> Self {
        Self {
            phases: vec![
                PhaseConfig::new(30.0, "Loading assets"),
                PhaseConfig::new(60.0, "Building layout"),
                PhaseConfig::new(85.0, "Applying theme"),
                PhaseConfig::new(100.0, "Ready"),
            ],
            tick_interval_ms: 65.0,
            base_increment: 2.5,
            jitter_max: 2.0,
            settle_delay_ms: 400.0,
            reveal_delay_ms: 600.0,
        }
    }
}

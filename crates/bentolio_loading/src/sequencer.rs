//! The loading sequencer state machine
//!
//! States: `Running(phase) -> Settling -> Loaded -> Complete`, plus a
//! terminal `Cancelled` for teardown. Progress and phase only ever move
//! forward; `is_loaded` and `show_main` latch true exactly once.

use rand::Rng;

use crate::phase::{SequencerConfig, SequencerError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunState {
    /// Periodic ticking toward 100
    Running,
    /// Reached 100, waiting for the settle delay
    Settling,
    /// `is_loaded` latched, waiting for the reveal delay
    Loaded,
    /// `show_main` latched; nothing left to do
    Complete,
    /// Torn down mid-sequence
    Cancelled,
}

/// Simulated loading progress driver
pub struct LoadingSequencer {
    config: SequencerConfig,
    state: RunState,
    progress: f32,
    phase: usize,
    is_loaded: bool,
    show_main: bool,
    /// Virtual time accumulated toward the next tick
    tick_accum_ms: f32,
    /// Virtual time accumulated in the current settle wait
    wait_accum_ms: f32,
}

impl LoadingSequencer {
    pub fn new(config: SequencerConfig) -> Result<Self, SequencerError> {
        config.validate()?;
        Ok(Self {
            config,
            state: RunState::Running,
            progress: 0.0,
            phase: 0,
            is_loaded: false,
            show_main: false,
            tick_accum_ms: 0.0,
            wait_accum_ms: 0.0,
        })
    }

    /// Advance the virtual clock
    ///
    /// A single large `dt_ms` traverses every stage it covers, so
    /// `advance(60_000.0, ..)` runs the whole sequence to completion.
    pub fn advance<R: Rng>(&mut self, dt_ms: f32, rng: &mut R) {
        let mut remaining = dt_ms.max(0.0);
        while remaining > 0.0 {
            match self.state {
                RunState::Complete | RunState::Cancelled => return,
                RunState::Running => {
                    let until_tick = self.config.tick_interval_ms - self.tick_accum_ms;
                    if remaining < until_tick {
                        self.tick_accum_ms += remaining;
                        return;
                    }
                    remaining -= until_tick;
                    self.tick_accum_ms = 0.0;
                    self.tick(rng);
                }
                RunState::Settling => {
                    let until = self.config.settle_delay_ms - self.wait_accum_ms;
                    if remaining < until {
                        self.wait_accum_ms += remaining;
                        return;
                    }
                    remaining -= until;
                    self.wait_accum_ms = 0.0;
                    self.is_loaded = true;
                    self.state = RunState::Loaded;
                    tracing::debug!("loading settled, is_loaded latched");
                }
                RunState::Loaded => {
                    let until = self.config.reveal_delay_ms - self.wait_accum_ms;
                    if remaining < until {
                        self.wait_accum_ms += remaining;
                        return;
                    }
                    remaining -= until;
                    self.wait_accum_ms = 0.0;
                    self.show_main = true;
                    self.state = RunState::Complete;
                    tracing::debug!("show_main latched, sequence complete");
                }
            }
        }
    }

    /// One progress tick: add the base increment plus additive jitter,
    /// clamping to the current phase threshold on a crossing.
    fn tick<R: Rng>(&mut self, rng: &mut R) {
        let jitter = if self.config.jitter_max > 0.0 {
            rng.gen_range(0.0..=self.config.jitter_max)
        } else {
            0.0
        };
        let next = self.progress + self.config.base_increment + jitter;
        let threshold = self.config.phases[self.phase].threshold;

        if next >= threshold {
            // Clamp so the crossing is never visible as overshoot.
            self.progress = threshold;
            if self.phase + 1 < self.config.phases.len() {
                self.phase += 1;
                tracing::trace!(phase = self.phase, "phase transition");
            } else {
                self.state = RunState::Settling;
                tracing::debug!("progress reached 100, tick stopped");
            }
        } else {
            self.progress = next;
        }
    }

    /// Teardown: stop ticking and freeze all state
    ///
    /// Safe to call at any point, any number of times. A completed
    /// sequencer stays completed.
    pub fn cancel(&mut self) {
        if self.state != RunState::Complete && self.state != RunState::Cancelled {
            self.state = RunState::Cancelled;
            tracing::debug!(progress = self.progress, "loading sequence cancelled");
        }
    }

    /// Current progress in `[0, 100]`, monotonic
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress rendered with fixed one-decimal precision
    pub fn progress_display(&self) -> String {
        format!("{:.1}", self.progress)
    }

    /// Current phase index, monotonic
    pub fn phase(&self) -> usize {
        self.phase
    }

    /// Caption of the current phase
    pub fn phase_label(&self) -> &str {
        &self.config.phases[self.phase].label
    }

    /// One-way latch, set after the settle delay
    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    /// One-way latch, set after the reveal delay
    pub fn show_main(&self) -> bool {
        self.show_main
    }

    /// Whether the full sequence (both latches) has run
    pub fn is_complete(&self) -> bool {
        self.state == RunState::Complete
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == RunState::Cancelled
    }
}

impl Default for LoadingSequencer {
    fn default() -> Self {
        Self::new(SequencerConfig::default()).expect("default sequencer config is valid")
    }
}

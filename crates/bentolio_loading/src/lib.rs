//! Bentolio Loading Sequencer
//!
//! A timer-driven simulation of a loading screen: progress climbs
//! through named phases with additive jitter, then two fixed settle
//! delays latch `is_loaded` and `show_main` one way. There is no real
//! work behind it; it is a pure animation driver.
//!
//! The sequencer is an explicit state machine driven by virtual time,
//! not a chain of callbacks, so the whole run is reproducible in tests
//! with a seeded RNG.
//!
//! # Example
//!
//! ```rust
//! use bentolio_loading::LoadingSequencer;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut seq = LoadingSequencer::default();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! seq.advance(60_000.0, &mut rng);
//! assert_eq!(seq.progress(), 100.0);
//! assert!(seq.is_loaded());
//! assert!(seq.show_main());
//! ```

pub mod phase;
pub mod sequencer;

pub use phase::{PhaseConfig, SequencerConfig, SequencerError};
pub use sequencer::LoadingSequencer;

#![warn(missing_docs)]
//! MulBench Core - Lap Timing
//!
//! Measurement primitives for the scalar multiplication suite:
//! - `Stopwatch` for fixed-capacity lap recording with explicit
//!   contract-violation errors
//! - `Clock`/`MonotonicClock` time source seam for deterministic tests
//! - CPU affinity pinning for stable readings

mod measure;
mod stopwatch;

pub use measure::{pin_to_cpu, Clock, MonotonicClock};
pub use stopwatch::{Stopwatch, StopwatchError, DEFAULT_SLOTS};

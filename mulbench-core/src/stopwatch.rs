//! Lap Timer
//!
//! Measures elapsed wall-clock time between explicit start/stop marks and
//! files each measurement into an ordered, fixed-capacity slot array for
//! later aggregation. One instance serves a whole benchmark run; `reset()`
//! clears it between independent measurement groups without reallocating.
//!
//! Slot storage is preallocated and zero-filled, so `total()` and
//! `average()` computed over the full capacity silently include zero-valued
//! unrecorded slots. Misuse (recording past capacity, stopping before
//! starting, addressing a slot out of range) is reported as an explicit
//! error instead of corrupting state.

use crate::measure::{Clock, MonotonicClock};
use thiserror::Error;

/// Default slot count, matching the round count of the benchmark suite.
pub const DEFAULT_SLOTS: usize = 5000;

/// Caller-contract violations the stopwatch refuses to absorb silently.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StopwatchError {
    /// `stop()` or `lap()` was called with no start mark set.
    #[error("stopwatch was never started")]
    NotStarted,

    /// Every slot is filled; `reset()` before recording more laps.
    #[error("all {capacity} lap slots are filled")]
    CapacityExhausted {
        /// Total slot count of the stopwatch.
        capacity: usize,
    },

    /// Explicit slot index past the end of the slot array.
    #[error("slot index {index} out of range (capacity {capacity})")]
    SlotOutOfRange {
        /// The offending index.
        index: usize,
        /// Total slot count of the stopwatch.
        capacity: usize,
    },
}

/// Lap timer with a fixed-capacity record of microsecond durations.
///
/// The clock is a type parameter so tests can script exact readings;
/// production code uses the [`MonotonicClock`] default.
#[derive(Debug)]
pub struct Stopwatch<C: Clock = MonotonicClock> {
    clock: C,
    start_mark: Option<std::time::Duration>,
    stop_mark: Option<std::time::Duration>,
    slots: Vec<i64>,
    cursor: usize,
}

impl Stopwatch<MonotonicClock> {
    /// Create a stopwatch with `capacity` zeroed slots, timed by the system
    /// monotonic clock. The slot array is allocated once, here.
    pub fn new(capacity: usize) -> Self {
        Self::with_clock(capacity, MonotonicClock::new())
    }
}

impl Default for Stopwatch<MonotonicClock> {
    fn default() -> Self {
        Self::new(DEFAULT_SLOTS)
    }
}

impl<C: Clock> Stopwatch<C> {
    /// Create a stopwatch driven by an explicit clock.
    pub fn with_clock(capacity: usize, clock: C) -> Self {
        Self {
            clock,
            start_mark: None,
            stop_mark: None,
            slots: vec![0; capacity],
            cursor: 0,
        }
    }

    /// Discard all recorded laps: cursor back to 0, every slot to 0, both
    /// marks cleared. No reallocation. Callable at any time, including
    /// before first use; calling it twice is the same as calling it once.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.slots.fill(0);
        self.start_mark = None;
        self.stop_mark = None;
    }

    /// Capture the current reading as the start mark. Calling twice in a
    /// row simply discards the previous mark.
    pub fn start(&mut self) {
        self.start_mark = Some(self.clock.now());
    }

    /// Capture the current reading as the stop mark and return the elapsed
    /// time since the start mark, in whole microseconds (truncated).
    pub fn stop(&mut self) -> Result<i64, StopwatchError> {
        let start = self.start_mark.ok_or(StopwatchError::NotStarted)?;
        let now = self.clock.now();
        self.stop_mark = Some(now);
        Ok(now.saturating_sub(start).as_micros() as i64)
    }

    /// Record one lap: stop, file the duration at the cursor, advance the
    /// cursor, and immediately start timing the next interval. The only gap
    /// in coverage is the bookkeeping itself.
    ///
    /// Returns the recorded duration. Errors leave the stopwatch unchanged.
    pub fn lap(&mut self) -> Result<i64, StopwatchError> {
        if self.cursor == self.slots.len() {
            return Err(StopwatchError::CapacityExhausted {
                capacity: self.slots.len(),
            });
        }
        let elapsed = self.stop()?;
        self.slots[self.cursor] = elapsed;
        self.cursor += 1;
        self.start();
        Ok(elapsed)
    }

    /// Record a lap at an explicit slot instead of appending: stop, file the
    /// duration at `index`, and restart timing. The append cursor does not
    /// move, so a later `lap()` still writes to its pre-existing next slot.
    pub fn lap_at(&mut self, index: usize) -> Result<i64, StopwatchError> {
        if index >= self.slots.len() {
            return Err(StopwatchError::SlotOutOfRange {
                index,
                capacity: self.slots.len(),
            });
        }
        let elapsed = self.stop()?;
        self.slots[index] = elapsed;
        self.start();
        Ok(elapsed)
    }

    /// Sum of all slots in microseconds. Unrecorded slots are zero, so this
    /// equals the sum of recorded laps.
    pub fn total(&self) -> i64 {
        self.slots.iter().sum()
    }

    /// `total()` divided by the full capacity, truncating. Unrecorded slots
    /// count as zero, so the mean is diluted whenever fewer laps were
    /// recorded than there are slots; use [`laps`](Self::laps) to compute a
    /// per-lap mean instead.
    pub fn average(&self) -> i64 {
        if self.slots.is_empty() {
            return 0;
        }
        self.total() / self.slots.len() as i64
    }

    /// Number of laps appended since the last reset.
    pub fn laps(&self) -> usize {
        self.cursor
    }

    /// Total slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The full slot array, recorded and zero-filled slots alike.
    pub fn slots(&self) -> &[i64] {
        &self.slots
    }
}

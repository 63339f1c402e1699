//! Monotonic Time Source
//!
//! The stopwatch reads time through the `Clock` trait so tests can script
//! exact readings. Production code uses `MonotonicClock`, a thin wrapper
//! over `std::time::Instant`.

use std::time::{Duration, Instant};

/// Source of monotonic readings for the stopwatch.
///
/// A reading is the elapsed time since an arbitrary fixed origin. Readings
/// from the same clock never decrease.
pub trait Clock {
    /// Current reading.
    fn now(&mut self) -> Duration;
}

/// Wall clock backed by `std::time::Instant`, with its origin fixed at
/// construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is the call site.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline(always)]
    fn now(&mut self) -> Duration {
        self.origin.elapsed()
    }
}

/// Set CPU affinity to pin the current thread to a specific core.
///
/// Avoids core migrations during measurement, which shift the timing noise
/// floor between rounds.
#[cfg(target_os = "linux")]
pub fn pin_to_cpu(cpu: usize) -> Result<(), std::io::Error> {
    use std::mem::MaybeUninit;

    unsafe {
        let mut set = MaybeUninit::<libc::cpu_set_t>::zeroed();
        let set_ref = set.assume_init_mut();

        libc::CPU_ZERO(set_ref);
        libc::CPU_SET(cpu, set_ref);

        let result = libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), set_ref);

        if result == 0 {
            Ok(())
        } else {
            Err(std::io::Error::last_os_error())
        }
    }
}

/// CPU pinning is not supported on this platform.
#[cfg(not(target_os = "linux"))]
pub fn pin_to_cpu(_cpu: usize) -> Result<(), std::io::Error> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_clock_advances() {
        let mut clock = MonotonicClock::new();
        let first = clock.now();
        std::thread::sleep(Duration::from_millis(10));
        let second = clock.now();

        assert!(second > first);
        // At least 10ms apart, well under 100ms accounting for scheduling
        assert!(second - first >= Duration::from_millis(5));
        assert!(second - first < Duration::from_millis(100));
    }
}

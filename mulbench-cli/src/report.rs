//! Result Output
//!
//! Formats the two per-group summary lines. The values keep the original
//! tool's scaling of the microsecond total (`/1_000_000`, `/1_000`, raw);
//! the labels name the units those values actually have.

use mulbench_core::{Clock, Stopwatch};

/// Aggregates of one finished measurement group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSummary {
    /// Sum over all stopwatch slots, microseconds.
    pub total_us: i64,
    /// Total divided by the full slot capacity, microseconds.
    pub average_us: i64,
    /// Laps actually recorded.
    pub laps: usize,
}

impl GroupSummary {
    /// Snapshot the aggregates of a stopwatch.
    pub fn from_watch<C: Clock>(watch: &Stopwatch<C>) -> Self {
        Self {
            total_us: watch.total(),
            average_us: watch.average(),
            laps: watch.laps(),
        }
    }
}

/// The two stdout lines printed after each group.
pub fn format_summary(summary: &GroupSummary) -> String {
    format!(
        "Took {}s ({}ms) [{}µs]\n - Average {}s ({}ms) [{}µs]",
        summary.total_us / 1_000_000,
        summary.total_us / 1_000,
        summary.total_us,
        summary.average_us / 1_000_000,
        summary.average_us / 1_000,
        summary.average_us,
    )
}

#![warn(missing_docs)]
//! MulBench CLI - Benchmark Runner
//!
//! Drives the four scalar-multiplication groups (32-bit integer, single,
//! double, and extended precision) sequentially against one shared
//! stopwatch, printing each group's summary and resetting the stopwatch
//! between groups. No data flows between groups.
//!
//! The report lines go to stdout; diagnostics go to a `tracing` subscriber
//! on stderr (filter with `RUST_LOG`, e.g. `RUST_LOG=mulbench_cli=info`).

mod report;
mod workload;

pub use report::{format_summary, GroupSummary};
pub use workload::{
    fill_f32, fill_f64, fill_i32, fill_wide, measure, Wide, BUFFER_LEN, FILL_SEED, ROUNDS,
};

use anyhow::Result;
use mulbench_core::{pin_to_cpu, Stopwatch};
use tracing::{info, warn};

/// Run the full suite and print the per-group summaries.
pub fn run() -> Result<()> {
    init_tracing();

    // Core migrations shift the noise floor between rounds; pinning is best
    // effort and the run proceeds without it.
    if let Err(err) = pin_to_cpu(0) {
        warn!("failed to pin to CPU 0: {}", err);
    }

    let mut watch = Stopwatch::new(ROUNDS);

    println!("Basic Multiplication");
    run_group(&mut watch, 1, "int", fill_i32, |a, b| a.wrapping_mul(b))?;
    run_group(&mut watch, 2, "float", fill_f32, |a, b| a * b)?;
    run_group(&mut watch, 3, "double", fill_f64, |a, b| a * b)?;
    run_group(&mut watch, 4, "extended", fill_wide, Wide::mul)?;
    println!("Done");

    Ok(())
}

/// Fill, measure, report, and reset for a single numeric type. The buffer is
/// local to the group and freed before the next group allocates its own.
fn run_group<T, F>(
    watch: &mut Stopwatch,
    index: usize,
    label: &str,
    fill: fn(usize) -> Vec<T>,
    mul: F,
) -> Result<()>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    println!("Test {}: {}", index, label);

    println!("  -- Warming up..");
    let values = fill(BUFFER_LEN);

    println!("  -- Starting..");
    info!(group = label, rounds = watch.capacity(), "measuring");
    measure(watch, &values, mul)?;

    let summary = GroupSummary::from_watch(watch);
    println!("{}", format_summary(&summary));
    info!(
        group = label,
        laps = summary.laps,
        total_us = summary.total_us,
        "group finished"
    );

    watch.reset();
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mulbench_cli=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

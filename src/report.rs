// SPDX-License-Identifier: MIT

use std::fmt::Write;
use std::time::Instant;

/// Runs `work` once and measures its wall-clock duration.
///
/// # Returns
/// The closure's result and the elapsed time in microseconds.
pub fn measure_micros<T>(work: impl FnOnce() -> T) -> (T, u128) {
    let started = Instant::now();
    let value = work();
    (value, started.elapsed().as_micros())
}

/// One timed strategy invocation, ready for the report table.
pub struct StrategyRun {
    pub name: &'static str,
    pub sum: i64,
    pub micros: u128,
}

const RULE: &str = "------------------------------------------------------";

/// Renders the benchmark report: array size, thread count, and one row per
/// strategy in the order the driver ran them.
pub fn render_report(array_size: usize, num_threads: usize, runs: &[StrategyRun]) -> String {
    let mut out = String::new();

    // Infallible for String; keeps `?` out of the signature.
    let _ = writeln!(out, "Array size     : {array_size}");
    let _ = writeln!(out, "Thread count   : {num_threads}");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{:<20} {:>15} {:>15}", "Method", "Sum", "Time (us)");
    let _ = writeln!(out, "{RULE}");
    for run in runs {
        let _ = writeln!(out, "{:<20} {:>15} {:>15}", run.name, run.sum, run.micros);
    }
    let _ = writeln!(out, "{RULE}");

    out
}

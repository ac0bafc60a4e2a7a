// Per-request run configuration and the measured outcome
//
// The original service kept these in process-wide statics, which races under
// concurrent requests. Here both are plain values: the dispatcher builds a
// RunConfig, the harness hands back a MeasuredRun.

use std::time::Duration;

use crate::case::Case;

/// Smallest accepted magnitude (10^3 iterations)
pub const MIN_MAGNITUDE: i64 = 3;
/// Largest accepted magnitude (10^9 iterations)
pub const MAX_MAGNITUDE: i64 = 9;

/// Fixed warm-up iteration count, independent of magnitude
pub const WARMUP_ITERATIONS: u64 = 20_000;

/// One benchmark request, immutable after parsing
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Selected workload
    pub case: Case,
    /// Decimal exponent of the iteration count, in [3, 9]
    pub magnitude: u32,
    /// Run an untimed warm-up pass first
    pub warmup: bool,
    /// Issue a reclamation hint before timing
    pub garbage: bool,
    /// Pause 1 ms after each outer iteration
    pub sleep: bool,
}

impl RunConfig {
    /// Iterations of the timed run: 10^magnitude
    pub fn iterations(&self) -> u64 {
        10u64.pow(self.magnitude)
    }
}

/// Outcome of exactly one timed workload invocation
#[derive(Debug, Clone, Copy)]
pub struct MeasuredRun {
    /// Wall-clock duration of the timed invocation
    pub elapsed: Duration,
    /// The workload's anti-elimination sentinel
    pub sentinel: i32,
}

impl MeasuredRun {
    /// Elapsed time in milliseconds with decimal fraction (nanoseconds / 1e6)
    pub fn millis(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000_000.0
    }
}

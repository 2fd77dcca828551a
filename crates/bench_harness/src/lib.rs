
// Pieces shared by the micro-benchmark programs: argument parsing,
// the optimization barrier, timing, and the two-line report.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use clap::Parser;

/// Iteration or element count used when none is given.
pub const DEFAULT_COUNT: u64 = 100_000_000;

#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct BenchArgs {
    /// Number of loop iterations (or buffer elements).
    #[arg(default_value_t = DEFAULT_COUNT)]
    pub count: u64,
}

/// Forces the compiler to treat `value` as observed, so the loop that
/// produced it can't be removed as dead code.
#[inline(always)]
pub fn escape<T>(value: &T) {
    black_box(value);
}

/// Runs `section` between two monotonic clock readings.
pub fn time_section(section: impl FnOnce()) -> Duration {
    let start = Instant::now();
    section();
    start.elapsed()
}

/// Elapsed time and checksum of one measured run.
///
/// Displays as
///
/// ```text
/// <time label>: <microseconds> us
/// <result label>: <value>
/// ```
pub struct Report<'a, T> {
    time_label: &'a str,
    elapsed: Duration,
    result_label: &'a str,
    result: T,
    label_width: Option<usize>,
}

impl<'a, T: fmt::Display> Report<'a, T> {
    pub fn new(time_label: &'a str, elapsed: Duration, result_label: &'a str, result: T) -> Self {
        Self {
            time_label,
            elapsed,
            result_label,
            result,
            label_width: None,
        }
    }

    /// Pad both labels to a common width plus one space, so the colons line up.
    pub fn aligned(mut self) -> Self {
        self.label_width = Some(self.time_label.len().max(self.result_label.len()) + 1);
        self
    }

    pub fn micros(&self) -> u128 {
        self.elapsed.as_micros()
    }
}

impl<T: fmt::Display> fmt::Display for Report<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.label_width.unwrap_or(0);
        writeln!(f, "{:<width$}: {} us", self.time_label, self.micros())?;
        write!(f, "{:<width$}: {}", self.result_label, self.result)
    }
}

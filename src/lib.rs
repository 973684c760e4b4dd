// Recursive Fibonacci benchmark
// Measures raw function call overhead: no memoization, no iteration.

use std::hint::black_box;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use tracing::debug;

/// Argument for the timed run.
pub const FIB_INPUT: i64 = 40;

/// Known value of `fib(40)`.
pub const EXPECTED_FIB_40: i64 = 102_334_155;

/// Prefix of the result line. Kept identical to the other runtimes' output
/// so reports can be diffed line by line.
pub const RUNTIME_LABEL: &str = "Go";

/// Naive doubly recursive Fibonacci, O(phi^n) calls.
pub fn fib(n: i64) -> i64 {
    if n <= 1 {
        return n;
    }
    fib(n - 1) + fib(n - 2)
}

/// Result of one timed `fib` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub n: i64,
    pub result: i64,
    pub elapsed: Duration,
}

impl Measurement {
    /// Times a single `fib(n)` call against the monotonic clock.
    pub fn measure(n: i64) -> Self {
        debug!(n, "starting timed run");

        let start = Instant::now();
        let result = fib(black_box(n));
        let elapsed = start.elapsed();

        debug!(n, result, seconds = elapsed.as_secs_f64(), "timed run finished");

        Measurement { n, result, elapsed }
    }

    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn matches_expected(&self, expected: i64) -> bool {
        self.result == expected
    }

    /// Writes the two report lines: the result, then the elapsed seconds.
    pub fn write_report<W: Write>(&self, label: &str, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}: Fib({}) = {}", label, self.n, self.result)?;
        writeln!(out, "Tiempo: {:.6} segundos", self.seconds())
    }
}

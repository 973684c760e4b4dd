// Recursive Fibonacci benchmark (single timed call)
// Output matches the other runtimes line for line; logs go to stderr.

use std::io::{self, Write};

use anyhow::Context;
use fib_bench::{Measurement, EXPECTED_FIB_40, FIB_INPUT, RUNTIME_LABEL};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let measurement = Measurement::measure(FIB_INPUT);

    if !measurement.matches_expected(EXPECTED_FIB_40) {
        error!(
            expected = EXPECTED_FIB_40,
            got = measurement.result,
            "fib result mismatch"
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    measurement
        .write_report(RUNTIME_LABEL, &mut out)
        .context("failed to write report to stdout")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}

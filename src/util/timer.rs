//! Elapsed-time instrumentation.

use std::time::{Duration, Instant};

/// Runs `f`, logging how long it took at `trace` level under `label`.
///
/// The result of `f` is returned untouched; timing never affects behaviour.
#[inline]
pub fn timed<T>(label: &'static str, f: impl FnOnce() -> T) -> T {
    let stopwatch = Stopwatch::start();
    let out = f();

    let elapsed_secs = stopwatch.elapsed().as_secs_f64();
    tracing::trace!(
        operation = label,
        elapsed_secs,
        "{label} executed in {elapsed_secs:.4} seconds"
    );

    out
}

/// A simple stopwatch, started on construction.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self { started: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

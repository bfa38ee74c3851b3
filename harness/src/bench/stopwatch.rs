use std::time::Instant;

use crate::bench::types::Timed;

/// Measures how long a closure takes.
pub trait Stopwatch {
    fn time<T, F: FnOnce() -> T>(&mut self, job: F) -> Timed<T>;
}

/// Monotonic wall-clock timing backed by [`Instant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl Stopwatch for WallClock {
    #[inline]
    fn time<T, F: FnOnce() -> T>(&mut self, job: F) -> Timed<T> {
        let start: Instant = Instant::now();
        let output: T = job();
        return (output, start.elapsed());
    }
}

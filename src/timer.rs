//! Timing of a single invocation.

use crate::algorithm::Algorithm;
use std::hint::black_box;
use std::time::Instant;

/// Runs `thunk` once and returns the elapsed time in nanoseconds.
///
/// The clock is monotonic (`Instant`). Only the call itself is inside the
/// timed region: the returned value is dropped after the clock stops, so
/// freeing a sorted output is never billed to the algorithm.
pub fn measure<R, F>(thunk: F) -> u64
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let out = thunk();
    let elapsed = start.elapsed();
    drop(black_box(out));

    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}

/// Source of per-invocation cost for the crossover search.
///
/// The real implementation is [`WallClock`]; tests substitute synthetic
/// costs to make the search deterministic.
pub trait Probe {
    fn cost(&mut self, algorithm: Algorithm, input: &[u32]) -> u64;
}

/// Measures cost as elapsed wall-clock nanoseconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl Probe for WallClock {
    fn cost(&mut self, algorithm: Algorithm, input: &[u32]) -> u64 {
        measure(|| algorithm.sort(input))
    }
}

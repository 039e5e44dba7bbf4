//! Descriptive statistics over a sample of durations.

use crate::error::BenchError;
use serde::Serialize;

/// Summary of one sample. All values are in the sample's unit (nanoseconds).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub median: f64,
    /// `None` when no single value is strictly the most frequent.
    pub mode: Option<u64>,
    /// Sample standard deviation (divisor `count - 1`), 0 for a single value.
    pub std_dev: f64,
    /// Coefficient of variation (std_dev / mean as percentage)
    pub cv: f64,
}

/// Reduces a sample to its [`Summary`].
///
/// Fails with [`BenchError::EmptySample`] on an empty slice.
///
/// # Example
///
/// ```
/// use hybridsort::summarize;
///
/// let stats = summarize(&[1, 1, 2, 3]).unwrap();
/// assert_eq!(stats.mode, Some(1));
/// assert_eq!(stats.median, 1.5);
/// assert_eq!(stats.mean, 1.75);
/// ```
pub fn summarize(sample: &[u64]) -> Result<Summary, BenchError> {
    if sample.is_empty() {
        return Err(BenchError::EmptySample);
    }

    let mut sorted = sample.to_vec();
    sorted.sort_unstable();

    let count = sorted.len();
    let n = count as f64;
    let min = sorted[0];
    let max = sorted[count - 1];

    let mean = sorted.iter().map(|&x| x as f64).sum::<f64>() / n;
    let median = if count % 2 == 1 {
        sorted[count / 2] as f64
    } else {
        (sorted[count / 2 - 1] as f64 + sorted[count / 2] as f64) / 2.0
    };

    let std_dev = if count < 2 {
        0.0
    } else {
        let variance = sorted.iter().map(|&x| (x as f64 - mean).powi(2)).sum::<f64>() / (n - 1.0);
        variance.sqrt()
    };
    let cv = if mean > 0.0 { (std_dev / mean) * 100.0 } else { 0.0 };

    Ok(Summary {
        count,
        min,
        max,
        // Float rounding can push the mean a hair outside [min, max] on constant samples.
        mean: mean.clamp(min as f64, max as f64),
        median,
        mode: unique_mode(&sorted),
        std_dev,
        cv,
    })
}

/// Most frequent value of a sorted slice, if exactly one value reaches the top count.
fn unique_mode(sorted: &[u64]) -> Option<u64> {
    let mut best: Option<u64> = None;
    let mut best_run = 0;
    let mut tied = false;

    for run in sorted.chunk_by(|a, b| a == b) {
        if run.len() > best_run {
            best = Some(run[0]);
            best_run = run.len();
            tied = false;
        } else if run.len() == best_run {
            tied = true;
        }
    }

    if tied {
        None
    } else {
        best
    }
}

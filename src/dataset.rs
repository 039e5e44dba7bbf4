//! Input generators for trials and the crossover search.

use crate::error::BenchError;
use rand::Rng;
use std::ops::RangeInclusive;

/// Upper bound of the default random value range.
pub const MAX_VALUE: u32 = 1_000_000;

/// Default range random elements are drawn from.
pub const DEFAULT_VALUE_RANGE: RangeInclusive<u32> = 0..=MAX_VALUE;

/// Shape of a fixed trial dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    /// `0, 1, ..., n - 1`
    Sorted,
    /// `n, n - 1, ..., 1`
    Reversed,
    /// `n` uniform draws from [`DEFAULT_VALUE_RANGE`].
    Random,
}

impl DatasetKind {
    pub fn label(&self) -> &'static str {
        match self {
            DatasetKind::Sorted => "sorted",
            DatasetKind::Reversed => "reversed",
            DatasetKind::Random => "random",
        }
    }

    pub fn generate(&self, n: usize, rng: &mut impl Rng) -> Vec<u32> {
        match self {
            DatasetKind::Sorted => ascending(n),
            DatasetKind::Reversed => descending(n),
            DatasetKind::Random => random_values(rng, n, &DEFAULT_VALUE_RANGE),
        }
    }
}

pub fn ascending(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}

pub fn descending(n: usize) -> Vec<u32> {
    (1..=n as u32).rev().collect()
}

/// `n` values drawn uniformly from `range`. The caller validates the range.
pub fn random_values(rng: &mut impl Rng, n: usize, range: &RangeInclusive<u32>) -> Vec<u32> {
    (0..n).map(|_| rng.gen_range(range.clone())).collect()
}

pub(crate) fn validate_range(range: &RangeInclusive<u32>) -> Result<(), BenchError> {
    if range.is_empty() {
        return Err(BenchError::InvalidValueRange {
            low: *range.start(),
            high: *range.end(),
        });
    }
    Ok(())
}

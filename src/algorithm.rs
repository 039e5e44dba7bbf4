//! Uniform handle over the three sort providers.
//!
//! Callers never branch on which algorithm they hold. The hybrid variant
//! carries its own threshold, so `Algorithm::sort` has the same shape for
//! all three and a timing thunk is just `|| algorithm.sort(&data)`.

use crate::error::BenchError;
use crate::{hybrid_sort_by, insertion_sort_by, merge_sort_by};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum Algorithm {
    Insertion,
    Merge,
    Hybrid { threshold: usize },
}

impl Algorithm {
    /// Builds the hybrid algorithm from the outcome of a crossover search.
    ///
    /// Fails with [`BenchError::MissingThreshold`] when no threshold was found.
    pub fn hybrid(threshold: Option<usize>) -> Result<Self, BenchError> {
        threshold
            .map(|threshold| Algorithm::Hybrid { threshold })
            .ok_or(BenchError::MissingThreshold)
    }

    /// The three providers in report order, with the hybrid bound to `threshold`.
    pub fn all(threshold: Option<usize>) -> Result<[Self; 3], BenchError> {
        Ok([Algorithm::Insertion, Algorithm::Merge, Algorithm::hybrid(threshold)?])
    }

    /// Stable label used as the algorithm key in result records.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Hybrid { .. } => "hybrid",
        }
    }

    pub fn sort<T>(&self, input: &[T]) -> Vec<T>
    where
        T: Clone + Ord,
    {
        self.sort_by(input, T::cmp)
    }

    pub fn sort_by<T, F>(&self, input: &[T], cmp: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T, &T) -> Ordering,
    {
        match *self {
            Algorithm::Insertion => insertion_sort_by(input, cmp),
            Algorithm::Merge => merge_sort_by(input, cmp),
            Algorithm::Hybrid { threshold } => hybrid_sort_by(input, threshold, cmp),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Hybrid { threshold } => write!(f, "hybrid(n0={})", threshold),
            other => f.write_str(other.name()),
        }
    }
}

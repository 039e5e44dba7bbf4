//! Error types for measurement and crossover search.
//!
//! Every failure here is a construction-time problem with the parameters a
//! caller handed in. Nothing is retried: a timing measurement observes one
//! execution and has no meaningful second attempt.
//!
//! A crossover search that finds nothing is *not* an error; see
//! [`crate::crossover::find_n0`], which returns `Ok(None)` for that case.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error type for trial, statistics and crossover operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Repetition counts must be at least 1.
    InvalidRepetitions(usize),

    /// The hybrid algorithm was requested without a crossover threshold.
    MissingThreshold,

    /// The crossover size limit must be positive.
    InvalidSizeLimit(usize),

    /// The crossover search floor must be at least 2.
    InvalidFloor(usize),

    /// Random inputs need a non-empty value range.
    InvalidValueRange {
        /// Lower bound provided.
        low: u32,
        /// Upper bound provided.
        high: u32,
    },

    /// Statistics cannot be computed over an empty sample.
    EmptySample,
}

impl BenchError {
    /// True for every variant caused by a malformed caller parameter.
    pub fn is_invalid_parameter(&self) -> bool {
        !matches!(self, BenchError::EmptySample)
    }
}

impl Display for BenchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            BenchError::InvalidRepetitions(reps) => {
                write!(f, "Invalid parameter: repetitions must be >= 1, got {}", reps)
            }
            BenchError::MissingThreshold => write!(
                f,
                "Invalid parameter: hybrid sort requires a crossover threshold"
            ),
            BenchError::InvalidSizeLimit(limit) => {
                write!(f, "Invalid parameter: size limit must be >= 1, got {}", limit)
            }
            BenchError::InvalidFloor(floor) => {
                write!(f, "Invalid parameter: search floor must be >= 2, got {}", floor)
            }
            BenchError::InvalidValueRange { low, high } => write!(
                f,
                "Invalid parameter: value range [{}, {}] is empty",
                low, high
            ),
            BenchError::EmptySample => {
                write!(f, "Cannot compute statistics over an empty sample")
            }
        }
    }
}

impl Error for BenchError {}

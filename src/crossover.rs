//! Crossover Point Finder
//!
//! Finds the smallest input size n0 at which insertion sort's mean running
//! time exceeds merge sort's. Sizes are scanned linearly from the floor and
//! the first size that satisfies the condition wins. Timings at small n are
//! noisy, so the crossover is not guaranteed to be monotonic; the linear
//! scan simply reports the first size where it is observed.

use crate::algorithm::Algorithm;
use crate::dataset::{random_values, validate_range, DEFAULT_VALUE_RANGE};
use crate::error::BenchError;
use crate::timer::{Probe, WallClock};
use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Smallest size the search may start from.
pub const MIN_FLOOR: usize = 2;

/// Whether both algorithms see the same random input within a repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPolicy {
    /// One input per repetition, timed under both algorithms.
    Shared,
    /// A fresh input for each algorithm. Mixes input variance into the comparison.
    Independent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossoverConfig {
    /// First size tried (inclusive)
    pub floor: usize,
    /// Last size tried is `size_limit - 1`
    pub size_limit: usize,
    /// Random inputs timed per size and algorithm
    pub repetitions: usize,
    pub value_range: RangeInclusive<u32>,
    pub inputs: InputPolicy,
}

impl Default for CrossoverConfig {
    fn default() -> Self {
        CrossoverConfig {
            floor: MIN_FLOOR,
            size_limit: 800,
            repetitions: 200,
            value_range: DEFAULT_VALUE_RANGE,
            inputs: InputPolicy::Shared,
        }
    }
}

impl CrossoverConfig {
    pub fn new(size_limit: usize, repetitions: usize) -> Self {
        CrossoverConfig {
            size_limit,
            repetitions,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.floor < MIN_FLOOR {
            return Err(BenchError::InvalidFloor(self.floor));
        }
        if self.size_limit == 0 {
            return Err(BenchError::InvalidSizeLimit(self.size_limit));
        }
        if self.repetitions < 1 {
            return Err(BenchError::InvalidRepetitions(self.repetitions));
        }
        validate_range(&self.value_range)
    }
}

/// Mean cost of both algorithms at one input size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeMeasurement {
    pub n: usize,
    pub insertion_mean: f64,
    pub merge_mean: f64,
}

impl SizeMeasurement {
    pub fn insertion_slower(&self) -> bool {
        self.insertion_mean > self.merge_mean
    }
}

/// Outcome of a search plus every size measured on the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossoverSearch {
    /// `None` when insertion sort never lost within the explored range.
    pub threshold: Option<usize>,
    pub trace: Vec<SizeMeasurement>,
}

/// Searches sizes `2..size_limit` with wall-clock timing and `thread_rng` inputs.
///
/// Returns `Ok(None)` when no crossover exists below `size_limit`, which
/// includes an empty range (`size_limit <= 2`). Only `size_limit == 0` is an error.
pub fn find_n0(size_limit: usize, repetitions: usize) -> Result<Option<usize>, BenchError> {
    let config = CrossoverConfig::new(size_limit, repetitions);
    let search = find_n0_with(&config, &mut WallClock, &mut rand::thread_rng())?;
    Ok(search.threshold)
}

/// Runs the crossover search with an explicit configuration, cost probe and
/// random source.
pub fn find_n0_with<P, R>(
    config: &CrossoverConfig,
    probe: &mut P,
    rng: &mut R,
) -> Result<CrossoverSearch, BenchError>
where
    P: Probe,
    R: Rng,
{
    config.validate()?;

    info!(
        "Searching crossover for n in [{}, {}) with {} repetitions per size ({:?} inputs)",
        config.floor, config.size_limit, config.repetitions, config.inputs
    );

    let mut trace = Vec::new();
    for n in config.floor..config.size_limit {
        let measurement = measure_size(config, n, probe, rng);
        debug!(
            "n={:>5}  insertion={:>12.1}ns  merge={:>12.1}ns",
            n, measurement.insertion_mean, measurement.merge_mean
        );

        let crossed = measurement.insertion_slower();
        trace.push(measurement);

        if crossed {
            info!("Crossover found: n0 = {}", n);
            return Ok(CrossoverSearch {
                threshold: Some(n),
                trace,
            });
        }
    }

    warn!(
        "No crossover below n = {}: insertion sort never lost to merge sort",
        config.size_limit
    );
    Ok(CrossoverSearch {
        threshold: None,
        trace,
    })
}

fn measure_size<P, R>(config: &CrossoverConfig, n: usize, probe: &mut P, rng: &mut R) -> SizeMeasurement
where
    P: Probe,
    R: Rng,
{
    let mut insertion_times = Vec::with_capacity(config.repetitions);
    let mut merge_times = Vec::with_capacity(config.repetitions);

    for _ in 0..config.repetitions {
        // Inputs are generated before either clock starts
        let input = random_values(rng, n, &config.value_range);
        let other = match config.inputs {
            InputPolicy::Shared => None,
            InputPolicy::Independent => Some(random_values(rng, n, &config.value_range)),
        };

        insertion_times.push(probe.cost(Algorithm::Insertion, &input));
        merge_times.push(probe.cost(Algorithm::Merge, other.as_deref().unwrap_or(&input[..])));
    }

    SizeMeasurement {
        n,
        insertion_mean: mean(&insertion_times),
        merge_mean: mean(&merge_times),
    }
}

fn mean(times: &[u64]) -> f64 {
    times.iter().map(|&t| t as f64).sum::<f64>() / times.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Insertion costs n², merge costs `factor * n * log2(n)`.
    struct Synthetic {
        merge_factor: f64,
    }

    impl Probe for Synthetic {
        fn cost(&mut self, algorithm: Algorithm, input: &[u32]) -> u64 {
            let n = input.len() as f64;
            match algorithm {
                Algorithm::Merge => (self.merge_factor * n * n.log2()) as u64,
                _ => (n * n) as u64,
            }
        }
    }

    /// Records the inputs each algorithm was handed.
    #[derive(Default)]
    struct Recorder {
        insertion: Vec<Vec<u32>>,
        merge: Vec<Vec<u32>>,
    }

    impl Probe for Recorder {
        fn cost(&mut self, algorithm: Algorithm, input: &[u32]) -> u64 {
            match algorithm {
                Algorithm::Insertion => self.insertion.push(input.to_vec()),
                _ => self.merge.push(input.to_vec()),
            }
            0
        }
    }

    fn config(floor: usize, size_limit: usize, repetitions: usize) -> CrossoverConfig {
        CrossoverConfig {
            floor,
            size_limit,
            repetitions,
            ..Default::default()
        }
    }

    #[test]
    fn test_synthetic_crossover_is_smallest_n() {
        let factor = 4.0;
        let cfg = config(2, 100, 3);
        let mut rng = StdRng::seed_from_u64(1);
        let search = find_n0_with(&cfg, &mut Synthetic { merge_factor: factor }, &mut rng).unwrap();

        let expected = (2..100).find(|&n| {
            let x = n as f64;
            (x * x) as u64 > (factor * x * x.log2()) as u64
        });
        assert_eq!(expected, Some(17));
        assert_eq!(search.threshold, expected);
        assert_eq!(search.trace.len(), 16);
        assert!(search.trace[..15].iter().all(|m| !m.insertion_slower()));
    }

    #[test]
    fn test_crossover_at_floor() {
        let mut rng = StdRng::seed_from_u64(2);
        let search =
            find_n0_with(&config(2, 10, 1), &mut Synthetic { merge_factor: 1.0 }, &mut rng).unwrap();
        assert_eq!(search.threshold, Some(2));
        assert_eq!(search.trace.len(), 1);
    }

    #[test]
    fn test_deterministic_with_stub() {
        let cfg = config(2, 60, 5);
        let a = find_n0_with(&cfg, &mut Synthetic { merge_factor: 4.0 }, &mut StdRng::seed_from_u64(3));
        let b = find_n0_with(&cfg, &mut Synthetic { merge_factor: 4.0 }, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_not_found() {
        let cfg = config(2, 12, 2);
        let mut rng = StdRng::seed_from_u64(4);
        // Merge is never cheaper below n = 12 with this factor
        let search = find_n0_with(&cfg, &mut Synthetic { merge_factor: 100.0 }, &mut rng).unwrap();
        assert_eq!(search.threshold, None);
        assert_eq!(search.trace.len(), 10);
    }

    #[test]
    fn test_shared_inputs() {
        let cfg = config(3, 6, 4);
        let mut recorder = Recorder::default();
        find_n0_with(&cfg, &mut recorder, &mut StdRng::seed_from_u64(5)).unwrap();

        assert_eq!(recorder.insertion.len(), 3 * 4);
        assert_eq!(recorder.insertion, recorder.merge);
        assert!(recorder.insertion.iter().all(|v| (3..6).contains(&v.len())));
    }

    #[test]
    fn test_independent_inputs() {
        let cfg = CrossoverConfig {
            inputs: InputPolicy::Independent,
            ..config(20, 21, 4)
        };
        let mut recorder = Recorder::default();
        find_n0_with(&cfg, &mut recorder, &mut StdRng::seed_from_u64(6)).unwrap();

        assert_eq!(recorder.merge.len(), 4);
        assert_ne!(recorder.insertion, recorder.merge);
    }

    #[test]
    fn test_invalid_parameters() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut probe = Synthetic { merge_factor: 1.0 };

        assert_eq!(
            find_n0_with(&config(2, 10, 0), &mut probe, &mut rng),
            Err(BenchError::InvalidRepetitions(0))
        );
        assert_eq!(
            find_n0_with(&config(2, 0, 5), &mut probe, &mut rng),
            Err(BenchError::InvalidSizeLimit(0))
        );
        assert_eq!(
            find_n0_with(&config(1, 10, 5), &mut probe, &mut rng),
            Err(BenchError::InvalidFloor(1))
        );
        assert_eq!(find_n0(0, 10), Err(BenchError::InvalidSizeLimit(0)));
    }

    #[test]
    fn test_limit_at_or_below_floor_is_not_found() {
        assert_eq!(find_n0(1, 5), Ok(None));
        assert_eq!(find_n0(2, 5), Ok(None));

        let mut recorder = Recorder::default();
        let search = find_n0_with(&config(5, 3, 4), &mut recorder, &mut StdRng::seed_from_u64(8)).unwrap();
        assert_eq!(search.threshold, None);
        assert!(search.trace.is_empty());
        assert!(recorder.insertion.is_empty() && recorder.merge.is_empty());
    }

    #[test]
    fn test_wall_clock_search_stays_in_range() {
        if let Some(n0) = find_n0(40, 3).unwrap() {
            assert!((2..40).contains(&n0));
        }
    }
}

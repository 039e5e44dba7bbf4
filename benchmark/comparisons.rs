//! Comparator count analysis.
//!
//! Counts comparator calls instead of time, which removes machine noise and
//! checks the asymptotic claims directly: insertion sort normalized by n²,
//! merge and hybrid normalized by n·log₂ n. A normalized value that stays
//! roughly flat as n grows confirms the expected complexity.

use hybridsort::dataset::{random_values, DEFAULT_VALUE_RANGE};
use hybridsort::statistics::summarize;
use hybridsort::{Algorithm, BenchError};
use rand::Rng;
use std::cell::Cell;

/// Array sizes for comparator analysis
pub const SIZES: &[usize] = &[100, 1_000, 10_000];

/// Random inputs per size
pub const ITERATIONS: usize = 5;

#[derive(Debug, Clone)]
pub struct ComparisonResult {
    pub n: usize,
    pub algorithm: Algorithm,
    pub comparisons_mean: f64,
    pub comparisons_sd: f64,
    /// Mean count divided by the algorithm's expected growth term
    pub normalized: f64,
}

/// Counts comparisons of every algorithm over random inputs of each size.
pub fn run_comparison_analysis(
    algorithms: &[Algorithm],
    rng: &mut impl Rng,
) -> Result<Vec<ComparisonResult>, BenchError> {
    let mut results = Vec::new();

    for &n in SIZES {
        let inputs: Vec<Vec<u32>> = (0..ITERATIONS)
            .map(|_| random_values(rng, n, &DEFAULT_VALUE_RANGE))
            .collect();

        for &algorithm in algorithms {
            let counts: Vec<u64> = inputs
                .iter()
                .map(|input| count_comparisons(algorithm, input))
                .collect();
            let stats = summarize(&counts)?;

            results.push(ComparisonResult {
                n,
                algorithm,
                comparisons_mean: stats.mean,
                comparisons_sd: stats.std_dev,
                normalized: stats.mean / growth_term(algorithm, n),
            });
        }
    }

    Ok(results)
}

pub fn count_comparisons(algorithm: Algorithm, input: &[u32]) -> u64 {
    let count = Cell::new(0u64);
    algorithm.sort_by(input, |a, b| {
        count.set(count.get() + 1);
        a.cmp(b)
    });
    count.get()
}

fn growth_term(algorithm: Algorithm, n: usize) -> f64 {
    let n = n.max(2) as f64;
    match algorithm {
        Algorithm::Insertion => n * n,
        Algorithm::Merge | Algorithm::Hybrid { .. } => n * n.log2(),
    }
}

pub fn export_csv(results: &[ComparisonResult]) -> String {
    let mut csv = String::from("n,algorithm,comparisons,comparisons_sd,normalized\n");
    for r in results {
        csv.push_str(&format!(
            "{},{},{:.0},{:.0},{:.6}\n",
            r.n,
            r.algorithm.name(),
            r.comparisons_mean,
            r.comparisons_sd,
            r.normalized
        ));
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_on_sorted_input_is_linear() {
        let input: Vec<u32> = (0..100).collect();
        assert_eq!(count_comparisons(Algorithm::Insertion, &input), 99);
    }

    #[test]
    fn test_insertion_on_reversed_input_is_quadratic() {
        let input: Vec<u32> = (0..100).rev().collect();
        assert_eq!(count_comparisons(Algorithm::Insertion, &input), 100 * 99 / 2);
    }

    #[test]
    fn test_merge_sort_bound() {
        let input: Vec<u32> = (0..1024).rev().collect();
        let count = count_comparisons(Algorithm::Merge, &input);
        assert!(count <= 1024 * 10);
    }

    #[test]
    fn test_hybrid_with_zero_threshold_matches_merge() {
        let input: Vec<u32> = vec![5, 1, 4, 1, 5, 9, 2, 6, 5, 3];
        assert_eq!(
            count_comparisons(Algorithm::Hybrid { threshold: 0 }, &input),
            count_comparisons(Algorithm::Merge, &input)
        );
    }
}

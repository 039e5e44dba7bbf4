//! Result set handed to reporting and export.
//!
//! Results are keyed `dataset -> algorithm -> AlgorithmResult`. Flat record
//! views with stable field names are provided for row-oriented writers such
//! as CSV.

use crate::error::BenchError;
use crate::statistics::{summarize, Summary};
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary and raw sample for one algorithm on one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmResult {
    pub summary: Summary,
    /// Durations in nanoseconds, in run order
    pub durations: Vec<u64>,
}

impl AlgorithmResult {
    pub fn from_sample(durations: Vec<u64>) -> Result<Self, BenchError> {
        Ok(AlgorithmResult {
            summary: summarize(&durations)?,
            durations,
        })
    }
}

/// One timed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawRecord<'a> {
    pub dataset: &'a str,
    pub algorithm: &'a str,
    pub run_index: usize,
    pub duration_ns: u64,
}

/// One summary row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord<'a> {
    pub dataset: &'a str,
    pub algorithm: &'a str,
    pub count: usize,
    pub min_ns: u64,
    pub max_ns: u64,
    pub mean_ns: f64,
    pub median_ns: f64,
    pub mode_ns: Option<u64>,
    pub std_dev_ns: f64,
}

/// Relative improvement of one algorithm's mean over a baseline's mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedupRecord<'a> {
    pub dataset: &'a str,
    pub algorithm: &'a str,
    pub baseline: &'a str,
    /// `(baseline_mean - mean) / baseline_mean * 100`; positive means faster
    pub improvement_pct: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    datasets: BTreeMap<String, BTreeMap<String, AlgorithmResult>>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, dataset: &str, algorithm: &str, result: AlgorithmResult) {
        self.datasets
            .entry(dataset.to_string())
            .or_default()
            .insert(algorithm.to_string(), result);
    }

    pub fn get(&self, dataset: &str, algorithm: &str) -> Option<&AlgorithmResult> {
        self.datasets.get(dataset)?.get(algorithm)
    }

    pub fn datasets(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, AlgorithmResult>)> {
        self.datasets.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn raw_records(&self) -> Vec<RawRecord<'_>> {
        let mut records = Vec::new();
        for (dataset, algorithms) in &self.datasets {
            for (algorithm, result) in algorithms {
                for (run_index, &duration_ns) in result.durations.iter().enumerate() {
                    records.push(RawRecord {
                        dataset,
                        algorithm,
                        run_index,
                        duration_ns,
                    });
                }
            }
        }
        records
    }

    pub fn summary_records(&self) -> Vec<SummaryRecord<'_>> {
        self.datasets
            .iter()
            .flat_map(|(dataset, algorithms)| {
                algorithms.iter().map(move |(algorithm, result)| {
                    let s = &result.summary;
                    SummaryRecord {
                        dataset,
                        algorithm,
                        count: s.count,
                        min_ns: s.min,
                        max_ns: s.max,
                        mean_ns: s.mean,
                        median_ns: s.median,
                        mode_ns: s.mode,
                        std_dev_ns: s.std_dev,
                    }
                })
            })
            .collect()
    }

    /// Improvement of every algorithm over `baseline` within each dataset.
    ///
    /// Datasets without the baseline, or where its mean is zero, are skipped.
    pub fn speedup_vs(&self, baseline: &str) -> Vec<SpeedupRecord<'_>> {
        let mut records = Vec::new();
        for (dataset, algorithms) in &self.datasets {
            let Some((baseline, base)) = algorithms.get_key_value(baseline) else {
                continue;
            };
            let base_mean = base.summary.mean;
            if base_mean <= 0.0 {
                continue;
            }
            for (algorithm, result) in algorithms {
                records.push(SpeedupRecord {
                    dataset,
                    algorithm,
                    baseline,
                    improvement_pct: (base_mean - result.summary.mean) / base_mean * 100.0,
                });
            }
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> ResultSet {
        let mut set = ResultSet::new();
        set.insert("sorted", "insertion", AlgorithmResult::from_sample(vec![10, 10, 10]).unwrap());
        set.insert("sorted", "merge", AlgorithmResult::from_sample(vec![40, 50, 60]).unwrap());
        set.insert("reversed", "insertion", AlgorithmResult::from_sample(vec![200, 200]).unwrap());
        set.insert("reversed", "merge", AlgorithmResult::from_sample(vec![50, 50]).unwrap());
        set
    }

    #[test]
    fn test_empty_sample_rejected() {
        assert_eq!(
            AlgorithmResult::from_sample(Vec::new()),
            Err(BenchError::EmptySample)
        );
    }

    #[test]
    fn test_lookup() {
        let set = sample_set();
        assert_eq!(set.get("sorted", "merge").unwrap().summary.mean, 50.0);
        assert!(set.get("sorted", "hybrid").is_none());
        assert!(set.get("random", "merge").is_none());
        assert_eq!(set.datasets().count(), 2);
    }

    #[test]
    fn test_raw_records() {
        let set = sample_set();
        let raw = set.raw_records();
        assert_eq!(raw.len(), 10);
        assert!(raw.contains(&RawRecord {
            dataset: "sorted",
            algorithm: "merge",
            run_index: 2,
            duration_ns: 60,
        }));
    }

    #[test]
    fn test_summary_records() {
        let set = sample_set();
        let rows = set.summary_records();
        assert_eq!(rows.len(), 4);
        let row = rows
            .iter()
            .find(|r| r.dataset == "sorted" && r.algorithm == "merge")
            .unwrap();
        assert_eq!((row.min_ns, row.max_ns, row.count), (40, 60, 3));
        assert_eq!(row.mode_ns, None);
    }

    #[test]
    fn test_speedup() {
        let set = sample_set();
        let speedups = set.speedup_vs("insertion");
        let reversed_merge = speedups
            .iter()
            .find(|r| r.dataset == "reversed" && r.algorithm == "merge")
            .unwrap();
        assert_eq!(reversed_merge.improvement_pct, 75.0);
        let sorted_merge = speedups
            .iter()
            .find(|r| r.dataset == "sorted" && r.algorithm == "merge")
            .unwrap();
        assert_eq!(sorted_merge.improvement_pct, -400.0);
        assert!(set.speedup_vs("bogo").is_empty());
    }

    #[test]
    fn test_json_shape() {
        let set = sample_set();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["sorted"]["merge"]["summary"]["min"], 40);
        assert_eq!(json["sorted"]["insertion"]["summary"]["mode"], 10);
        assert!(json["sorted"]["merge"]["summary"]["mode"].is_null());
        assert_eq!(json["reversed"]["merge"]["durations"][1], 50);
    }
}

//! CSV and JSON export of benchmark results.

use hybridsort::crossover::CrossoverSearch;
use hybridsort::report::ResultSet;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Run parameters stored next to the results.
#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    pub timestamp_ms: u128,
    pub machine: String,
    pub dataset_size: usize,
    pub repetitions: usize,
    pub warmup: usize,
    pub threshold: Option<usize>,
    pub seed: Option<u64>,
}

impl RunMetadata {
    pub fn collect(
        dataset_size: usize,
        repetitions: usize,
        warmup: usize,
        threshold: Option<usize>,
        seed: Option<u64>,
    ) -> Self {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);

        RunMetadata {
            timestamp_ms,
            machine: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
            dataset_size,
            repetitions,
            warmup,
            threshold,
            seed,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: &'a RunMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    crossover: Option<&'a CrossoverSearch>,
    results: &'a ResultSet,
}

/// Writes `results.json`, `raw_times.csv`, `summary_stats.csv`, `speedup.csv`
/// and `metadata.csv` into `dir`, creating it if needed.
///
/// The crossover trace, when a search ran, is embedded in `results.json`.
pub fn export_results(
    dir: &Path,
    results: &ResultSet,
    crossover: Option<&CrossoverSearch>,
    meta: &RunMetadata,
) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();

    let path = dir.join("results.json");
    let json = serde_json::to_string_pretty(&JsonReport {
        metadata: meta,
        crossover,
        results,
    })?;
    fs::write(&path, json)?;
    written.push(path);

    let path = dir.join("raw_times.csv");
    fs::write(&path, raw_csv(results))?;
    written.push(path);

    let path = dir.join("summary_stats.csv");
    fs::write(&path, summary_csv(results))?;
    written.push(path);

    let path = dir.join("speedup.csv");
    fs::write(&path, speedup_csv(results, "insertion"))?;
    written.push(path);

    let path = dir.join("metadata.csv");
    fs::write(&path, metadata_csv(meta))?;
    written.push(path);

    Ok(written)
}

pub fn export_crossover(dir: &Path, search: &CrossoverSearch) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join("crossover.csv");
    fs::write(&path, crossover_csv(search))?;
    Ok(path)
}

fn raw_csv(results: &ResultSet) -> String {
    let mut csv = String::from("dataset,algorithm,run_index,duration_ns\n");
    for r in results.raw_records() {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            r.dataset, r.algorithm, r.run_index, r.duration_ns
        ));
    }
    csv
}

fn summary_csv(results: &ResultSet) -> String {
    let mut csv = String::from(
        "dataset,algorithm,count,min_ns,max_ns,mean_ns,median_ns,mode_ns,std_dev_ns\n",
    );
    for r in results.summary_records() {
        let mode = r
            .mode_ns
            .map(|m| m.to_string())
            .unwrap_or_else(|| "none".to_string());
        csv.push_str(&format!(
            "{},{},{},{},{},{:.1},{:.1},{},{:.1}\n",
            r.dataset, r.algorithm, r.count, r.min_ns, r.max_ns, r.mean_ns, r.median_ns, mode, r.std_dev_ns
        ));
    }
    csv
}

fn speedup_csv(results: &ResultSet, baseline: &str) -> String {
    let mut csv = String::from("dataset,algorithm,baseline,improvement_pct\n");
    for r in results.speedup_vs(baseline) {
        csv.push_str(&format!(
            "{},{},{},{:.2}\n",
            r.dataset, r.algorithm, r.baseline, r.improvement_pct
        ));
    }
    csv
}

fn crossover_csv(search: &CrossoverSearch) -> String {
    let mut csv = String::from("n,insertion_mean_ns,merge_mean_ns,insertion_slower\n");
    for m in &search.trace {
        csv.push_str(&format!(
            "{},{:.1},{:.1},{}\n",
            m.n,
            m.insertion_mean,
            m.merge_mean,
            m.insertion_slower()
        ));
    }
    csv
}

fn metadata_csv(meta: &RunMetadata) -> String {
    let optional = |v: Option<String>| v.unwrap_or_else(|| "none".to_string());
    format!(
        "key,value\ntimestamp,{}\nmachine,{}\nn,{}\nrepetitions,{}\nwarmup,{}\nthreshold,{}\nseed,{}\n",
        meta.timestamp_ms,
        meta.machine,
        meta.dataset_size,
        meta.repetitions,
        meta.warmup,
        optional(meta.threshold.map(|t| t.to_string())),
        optional(meta.seed.map(|s| s.to_string())),
    )
}

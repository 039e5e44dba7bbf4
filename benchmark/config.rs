//! Benchmark configuration: defaults plus command-line overrides.

use hybridsort::crossover::{CrossoverConfig, InputPolicy, MIN_FLOOR};
use hybridsort::dataset::DatasetKind;
use std::path::PathBuf;
use std::str::FromStr;

// ============================================================================
// DEFAULTS
// ============================================================================

/// Elements in each fixed trial dataset
pub const DATASET_SIZE: usize = 10_000;

/// Timed runs per algorithm and dataset
pub const REPETITIONS: usize = 100;

/// Untimed runs before each sample
pub const WARMUP: usize = 5;

/// Crossover search covers sizes below this
pub const CROSSOVER_SIZE_LIMIT: usize = 800;

/// Random inputs per size in the crossover search (higher = more stable but slower)
pub const CROSSOVER_REPETITIONS: usize = 200;

/// Where `--export` writes CSV, JSON and SVG files
pub const OUTPUT_DIR: &str = "figs";

pub const USAGE: &str = "\
Usage: benchmark [FLAGS]

Modes (all run when none is given):
  --crossover            Search for the crossover threshold n0
  --trials               Time insertion, merge and hybrid sort on fixed datasets
  --comparisons          Count comparator calls per algorithm

Options:
  --size N               Dataset size for trials (default 10000)
  --reps N               Timed repetitions per algorithm (default 100)
  --warmup N             Untimed runs before each sample (default 5)
  --limit N              Crossover search upper bound, exclusive (default 800)
  --crossover-reps N     Random inputs per size in the search (default 200)
  --floor N              First size tried by the search (default 2)
  --threshold N          Use N as n0 instead of searching
  --independent-inputs   Time each algorithm on its own random input in the search
  --random               Add a random dataset to the trials
  --seed N               Seed the random generator
  --export               Write CSV, JSON and SVG results
  --out DIR              Output directory for --export (default figs)
  -h, --help             Show this message";

const BOOL_FLAGS: &[&str] = &[
    "--crossover",
    "--trials",
    "--comparisons",
    "--independent-inputs",
    "--random",
    "--export",
];

const VALUE_FLAGS: &[&str] = &[
    "--size",
    "--reps",
    "--warmup",
    "--limit",
    "--crossover-reps",
    "--floor",
    "--threshold",
    "--seed",
    "--out",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub run_crossover: bool,
    pub run_trials: bool,
    pub run_comparisons: bool,
    pub export: bool,
    pub dataset_size: usize,
    pub repetitions: usize,
    pub warmup: usize,
    pub datasets: Vec<DatasetKind>,
    pub crossover: CrossoverConfig,
    /// Fixed n0; skips the search when set
    pub threshold: Option<usize>,
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            run_crossover: true,
            run_trials: true,
            run_comparisons: true,
            export: false,
            dataset_size: DATASET_SIZE,
            repetitions: REPETITIONS,
            warmup: WARMUP,
            datasets: vec![DatasetKind::Sorted, DatasetKind::Reversed],
            crossover: CrossoverConfig {
                floor: MIN_FLOOR,
                size_limit: CROSSOVER_SIZE_LIMIT,
                repetitions: CROSSOVER_REPETITIONS,
                ..Default::default()
            },
            threshold: None,
            seed: None,
            output_dir: PathBuf::from(OUTPUT_DIR),
        }
    }
}

impl Config {
    /// Parses `args` as returned by `std::env::args()` (program name first).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        check_flags(args)?;

        let has = |flag: &str| args.iter().any(|a| a == flag);
        let mut config = Config::default();

        let run_crossover = has("--crossover");
        let run_trials = has("--trials");
        let run_comparisons = has("--comparisons");

        // If no specific mode, run all
        if run_crossover || run_trials || run_comparisons {
            config.run_crossover = run_crossover;
            config.run_trials = run_trials;
            config.run_comparisons = run_comparisons;
        }

        config.export = has("--export");
        if has("--independent-inputs") {
            config.crossover.inputs = InputPolicy::Independent;
        }
        if has("--random") {
            config.datasets.push(DatasetKind::Random);
        }

        if let Some(size) = value_of(args, "--size")? {
            config.dataset_size = size;
        }
        if let Some(reps) = value_of(args, "--reps")? {
            config.repetitions = reps;
        }
        if let Some(warmup) = value_of(args, "--warmup")? {
            config.warmup = warmup;
        }
        if let Some(limit) = value_of(args, "--limit")? {
            config.crossover.size_limit = limit;
        }
        if let Some(reps) = value_of(args, "--crossover-reps")? {
            config.crossover.repetitions = reps;
        }
        if let Some(floor) = value_of(args, "--floor")? {
            config.crossover.floor = floor;
        }
        if let Some(dir) = value_of::<String>(args, "--out")? {
            config.output_dir = PathBuf::from(dir);
        }
        config.threshold = value_of(args, "--threshold")?;
        config.seed = value_of(args, "--seed")?;

        Ok(config)
    }

    /// Whether the crossover search has to run.
    pub fn needs_search(&self) -> bool {
        self.run_crossover || ((self.run_trials || self.run_comparisons) && self.threshold.is_none())
    }
}

fn check_flags(args: &[String]) -> Result<(), String> {
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if BOOL_FLAGS.contains(&arg.as_str()) {
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            if iter.next().is_none() {
                return Err(format!("{} expects a value", arg));
            }
            continue;
        }
        return Err(format!("unknown argument: {}", arg));
    }
    Ok(())
}

fn value_of<T: FromStr>(args: &[String], flag: &str) -> Result<Option<T>, String> {
    let Some(pos) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    let raw = args
        .get(pos + 1)
        .ok_or_else(|| format!("{} expects a value", flag))?;
    raw.parse()
        .map(Some)
        .map_err(|_| format!("invalid value for {}: {}", flag, raw))
}

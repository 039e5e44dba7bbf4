//! Sort Crossover Benchmark Suite
//!
//! Run with: `cargo run --bin benchmark --release -- [FLAGS]`
//!
//! Flags:
//!   --crossover    Search for the crossover threshold n0
//!   --trials       Time insertion, merge and hybrid sort on fixed datasets
//!   --comparisons  Count comparator calls per algorithm
//!   --export       Export results to CSV, JSON and SVG files
//!
//! If no mode flags are provided, runs all. See `--help` for the numeric options.

mod charts;
mod comparisons;
mod config;
mod export;

use crate::comparisons::{run_comparison_analysis, ComparisonResult};
use crate::config::{Config, USAGE};
use crate::export::{export_crossover, export_results, RunMetadata};
use hybridsort::crossover::{find_n0_with, CrossoverSearch};
use hybridsort::report::{AlgorithmResult, ResultSet};
use hybridsort::{run_trials, Algorithm, WallClock};
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fs;
use std::hint::black_box;
use std::io::{self, Write};
use std::process;

/// Crossover rows printed before the table is cut to the tail
const TRACE_ROWS: usize = 12;

// ============================================================================
// OUTPUT HELPERS
// ============================================================================

fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{}M", n / 1_000_000)
    } else if n >= 1_000 {
        format!("{}K", n / 1_000)
    } else {
        format!("{}", n)
    }
}

/// Formats nanoseconds with a unit that keeps 3-4 significant digits.
fn format_ns(ns: f64) -> String {
    if ns >= 1e9 {
        format!("{:.3}s", ns / 1e9)
    } else if ns >= 1e6 {
        format!("{:.3}ms", ns / 1e6)
    } else if ns >= 1e3 {
        format!("{:.2}µs", ns / 1e3)
    } else {
        format!("{:.0}ns", ns)
    }
}

// ============================================================================
// CROSSOVER SEARCH
// ============================================================================

fn run_crossover(config: &Config, rng: &mut StdRng) -> Result<CrossoverSearch, Box<dyn Error>> {
    println!();
    println!("Crossover Search");
    println!("================");
    println!(
        "  n in [{}, {}), {} random inputs per size",
        config.crossover.floor, config.crossover.size_limit, config.crossover.repetitions
    );

    let search = find_n0_with(&config.crossover, &mut WallClock, rng)?;
    print_crossover_table(&search);

    match search.threshold {
        Some(n0) => println!("  n0 = {}", n0),
        None => println!(
            "  No crossover found below n = {}",
            format_number(config.crossover.size_limit)
        ),
    }

    Ok(search)
}

fn print_crossover_table(search: &CrossoverSearch) {
    let skipped = search.trace.len().saturating_sub(TRACE_ROWS);

    println!();
    println!("┌────────┬─────────────────┬─────────────────┬───────────┐");
    println!("│   n    │    Insertion    │      Merge      │  Slower   │");
    println!("├────────┼─────────────────┼─────────────────┼───────────┤");
    if skipped > 0 {
        println!("{}", skipped_row(skipped));
    }
    for m in &search.trace[skipped..] {
        println!(
            "│ {:>6} │ {:>15} │ {:>15} │ {:>9} │",
            m.n,
            format_ns(m.insertion_mean),
            format_ns(m.merge_mean),
            if m.insertion_slower() { "insertion" } else { "merge" }
        );
    }
    println!("└────────┴─────────────────┴─────────────────┴───────────┘");
}

/// Full-width crossover table row standing in for the sizes not shown.
fn skipped_row(skipped: usize) -> String {
    format!("│ {:^54} │", format!("... {} smaller sizes ...", skipped))
}

// ============================================================================
// TRIALS
// ============================================================================

fn run_trials_benchmark(
    config: &Config,
    algorithms: &[Algorithm],
    rng: &mut StdRng,
) -> Result<ResultSet, Box<dyn Error>> {
    println!();
    println!("Execution Time Trials");
    println!("=====================");

    let mut results = ResultSet::new();

    for kind in &config.datasets {
        // Dataset is built once and shared by every algorithm and run
        let data = kind.generate(config.dataset_size, rng);

        for &algorithm in algorithms {
            print!(
                "  {:<9} n={:<6} {:<16}...",
                kind.label(),
                format_number(config.dataset_size),
                algorithm.to_string()
            );
            io::stdout().flush()?;

            for _ in 0..config.warmup {
                black_box(algorithm.sort(&data));
            }

            let sample = run_trials(algorithm, &data, config.repetitions)?;
            let result = AlgorithmResult::from_sample(sample)?;
            println!(" mean {}", format_ns(result.summary.mean));

            results.insert(kind.label(), algorithm.name(), result);
        }
    }

    Ok(results)
}

fn print_summary_table(results: &ResultSet) {
    println!();
    println!("┌──────────┬───────────┬────────────┬────────────┬────────────┬────────────┬────────────┬────────────┐");
    println!("│ Dataset  │ Algorithm │    Mean    │   Median   │    Min     │    Max     │  Std Dev   │    Mode    │");
    println!("├──────────┼───────────┼────────────┼────────────┼────────────┼────────────┼────────────┼────────────┤");
    for (dataset, algorithms) in results.datasets() {
        for (algorithm, r) in algorithms {
            let s = &r.summary;
            let mode = s
                .mode
                .map(|m| format_ns(m as f64))
                .unwrap_or_else(|| "none".to_string());
            println!(
                "│ {:<8} │ {:<9} │ {:>10} │ {:>10} │ {:>10} │ {:>10} │ {:>10} │ {:>10} │",
                dataset,
                algorithm,
                format_ns(s.mean),
                format_ns(s.median),
                format_ns(s.min as f64),
                format_ns(s.max as f64),
                format_ns(s.std_dev),
                mode
            );
        }
    }
    println!("└──────────┴───────────┴────────────┴────────────┴────────────┴────────────┴────────────┴────────────┘");
}

fn print_speedup_table(results: &ResultSet, baseline: &str) {
    println!();
    println!("Improvement over {} (positive = faster)", baseline);
    println!("┌──────────┬───────────┬────────────┐");
    println!("│ Dataset  │ Algorithm │     %      │");
    println!("├──────────┼───────────┼────────────┤");
    for r in results.speedup_vs(baseline) {
        println!(
            "│ {:<8} │ {:<9} │ {:>9.1}% │",
            r.dataset, r.algorithm, r.improvement_pct
        );
    }
    println!("└──────────┴───────────┴────────────┘");
}

// ============================================================================
// COMPARATOR COUNT ANALYSIS
// ============================================================================

fn run_comparisons(
    config: &Config,
    algorithms: &[Algorithm],
    rng: &mut StdRng,
) -> Result<(), Box<dyn Error>> {
    println!();
    println!("Comparator Count Analysis");
    println!("=========================");
    println!("Insertion normalized by n², merge and hybrid by n·log₂ n");

    let results = run_comparison_analysis(algorithms, rng)?;
    print_comparator_table(&results);

    if config.export {
        fs::create_dir_all(&config.output_dir)?;
        let path = config.output_dir.join("comparator-analysis.csv");
        fs::write(&path, comparisons::export_csv(&results))?;
        println!("Exported: {}", path.display());
    }
    Ok(())
}

fn print_comparator_table(results: &[ComparisonResult]) {
    println!();
    println!("┌────────────┬──────────────────┬─────────────────┬────────────┐");
    println!("│     n      │    Algorithm     │   Comparisons   │ Normalized │");
    println!("├────────────┼──────────────────┼─────────────────┼────────────┤");
    for r in results {
        println!(
            "│ {:>10} │ {:<16} │ {:>15.0} │ {:>10.4} │",
            format_number(r.n),
            r.algorithm.to_string(),
            r.comparisons_mean,
            r.normalized
        );
    }
    println!("└────────────┴──────────────────┴─────────────────┴────────────┘");
}

// ============================================================================
// MAIN
// ============================================================================

fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!();
    println!("Sort Crossover Benchmark");
    println!("========================");

    let search = if config.needs_search() {
        let search = run_crossover(&config, &mut rng)?;
        if config.export {
            let path = export_crossover(&config.output_dir, &search)?;
            println!("Exported: {}", path.display());
        }
        Some(search)
    } else {
        None
    };

    // An explicit --threshold always wins over the search
    let threshold = config
        .threshold
        .or_else(|| search.as_ref().and_then(|s| s.threshold));
    if let Some(n0) = threshold {
        info!("Hybrid sort uses n0 = {}", n0);
    }

    if config.run_trials {
        let algorithms = Algorithm::all(threshold)?;
        let results = run_trials_benchmark(&config, &algorithms, &mut rng)?;
        print_summary_table(&results);
        print_speedup_table(&results, Algorithm::Insertion.name());

        if config.export {
            let meta = RunMetadata::collect(
                config.dataset_size,
                config.repetitions,
                config.warmup,
                threshold,
                config.seed,
            );
            let mut written = export_results(&config.output_dir, &results, search.as_ref(), &meta)?;
            written.extend(charts::write_charts(
                &config.output_dir,
                &results,
                Algorithm::Insertion.name(),
            )?);
            for path in written {
                println!("Exported: {}", path.display());
            }
        }
    }

    if config.run_comparisons {
        let mut algorithms = vec![Algorithm::Insertion, Algorithm::Merge];
        match Algorithm::hybrid(threshold) {
            Ok(hybrid) => algorithms.push(hybrid),
            Err(e) => warn!("Skipping hybrid in comparator analysis: {}", e),
        }
        run_comparisons(&config, &algorithms, &mut rng)?;
    }

    println!();
    println!("Done!");
    if !config.export {
        println!("Run with --export to write CSV, JSON and SVG files");
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return;
    }

    let result = Config::from_args(&args)
        .map_err(Box::<dyn Error>::from)
        .and_then(run);

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_row_matches_table_width() {
        let border = "┌────────┬─────────────────┬─────────────────┬───────────┐";
        for skipped in [1, 42, 797] {
            assert_eq!(skipped_row(skipped).chars().count(), border.chars().count());
        }
    }

    #[test]
    fn test_format_ns_units() {
        assert_eq!(format_ns(512.0), "512ns");
        assert_eq!(format_ns(2_500.0), "2.50µs");
        assert_eq!(format_ns(3_000_000.0), "3.000ms");
        assert_eq!(format_ns(1.5e9), "1.500s");
    }
}

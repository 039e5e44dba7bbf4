//! Crossover Stability Check
//!
//! Repeats the n0 search for several repetition counts to show how much the
//! crossover point moves between runs. Few repetitions per size make the
//! means noisy and the first size where insertion loses jumps around.
//!
//! Run with: `cargo run --bin crossover --release -- [--limit N] [--seed N]`

use hybridsort::crossover::{find_n0_with, CrossoverConfig};
use hybridsort::statistics::summarize;
use hybridsort::WallClock;
use log::{error, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::io::{self, Write};
use std::process;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Random inputs per size, one search per entry
const REPETITION_COUNTS: &[usize] = &[10, 50, 200];

/// Searches per repetition count
const RUNS: usize = 3;

/// Search upper bound (exclusive)
const SIZE_LIMIT: usize = 800;

struct Options {
    size_limit: usize,
    seed: Option<u64>,
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        size_limit: SIZE_LIMIT,
        seed: None,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| format!("{} expects a value", arg))?;
        match arg.as_str() {
            "--limit" => {
                options.size_limit = value
                    .parse()
                    .map_err(|_| format!("invalid value for --limit: {}", value))?;
            }
            "--seed" => {
                options.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid value for --seed: {}", value))?,
                );
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(options)
}

// ============================================================================
// MAIN
// ============================================================================

fn run(options: Options) -> Result<(), Box<dyn Error>> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              Insertion / Merge Crossover Stability           ║");
    println!("╠══════════════════════════════════════════════════════════════╣");
    println!("║  {} searches per repetition count, sizes below {:<6}         ║", RUNS, options.size_limit);
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut rows: Vec<(usize, Vec<Option<usize>>)> = Vec::new();

    for &repetitions in REPETITION_COUNTS {
        let config = CrossoverConfig::new(options.size_limit, repetitions);
        let mut found = Vec::with_capacity(RUNS);

        for run in 0..RUNS {
            print!("  reps = {:<4} run {} ...", repetitions, run + 1);
            io::stdout().flush()?;

            let search = find_n0_with(&config, &mut WallClock, &mut rng)?;
            match search.threshold {
                Some(n0) => println!(" n0 = {}", n0),
                None => println!(" not found"),
            }
            found.push(search.threshold);
        }
        rows.push((repetitions, found));
    }

    println!();
    println!("┌────────┬──────────────────────┬──────────┬──────────┐");
    println!("│  reps  │     n0 per run       │   mean   │ std dev  │");
    println!("├────────┼──────────────────────┼──────────┼──────────┤");
    for (repetitions, found) in &rows {
        let runs: Vec<String> = found
            .iter()
            .map(|t| t.map_or_else(|| "-".to_string(), |n| n.to_string()))
            .collect();
        let values: Vec<u64> = found.iter().flatten().map(|&n| n as u64).collect();

        let (mean, sd) = match summarize(&values) {
            Ok(s) => (format!("{:.1}", s.mean), format!("{:.1}", s.std_dev)),
            Err(_) => {
                warn!("No crossover found with {} repetitions", repetitions);
                ("-".to_string(), "-".to_string())
            }
        };
        println!(
            "│ {:>6} │ {:<20} │ {:>8} │ {:>8} │",
            repetitions,
            runs.join(", "),
            mean,
            sd
        );
    }
    println!("└────────┴──────────────────────┴──────────┴──────────┘");
    println!();
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let result = parse_options(&args)
        .map_err(Box::<dyn Error>::from)
        .and_then(run);

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

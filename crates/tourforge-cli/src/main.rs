//! # TourForge CLI
//!
//! Solves a travelling salesman instance read from a matrix file:
//!
//! ```text
//! tourforge cities.txt brute-force
//! tourforge cities.txt 2opt --time-limit 10
//! tourforge cities.txt all --config solver.toml
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tourforge::{Solver, SolverConfig, StrategyType};
use tracing::debug;

mod matrix_file;
mod report;

use report::Report;

/// Command-line interface for the TourForge solvers
#[derive(Parser, Debug)]
#[command(name = "tourforge")]
#[command(about = "Travelling salesman solver over a distance matrix file")]
#[command(long_about = "Solves a travelling salesman instance given as a distance matrix file.

Matrix file: one row per line, whitespace-separated distances,
'inf' or '-' for pairs with no direct edge.

Algorithms:
  brute-force     exact search over every visiting order
  2opt            first-improvement 2-opt local search
  christofides    spanning tree, matching and shortcutting
  all             run each of the above in turn")]
#[command(version)]
struct Cli {
    /// Distance matrix file
    matrix_file: PathBuf,

    /// Algorithm: brute-force, 2opt, christofides, or all
    algorithm: String,

    /// Solver configuration file (TOML, or YAML by .yaml/.yml extension)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Stop each solve after this many seconds and report the best tour so far
    #[arg(short, long, value_name = "SECS")]
    time_limit: Option<f64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Strategies selected on the command line.
fn select_strategies(algorithm: &str) -> Result<Vec<StrategyType>> {
    if algorithm.eq_ignore_ascii_case("all") {
        return Ok(StrategyType::ALL.to_vec());
    }
    let strategy = algorithm
        .parse::<StrategyType>()
        .with_context(|| format!("invalid algorithm '{algorithm}'"))?;
    Ok(vec![strategy])
}

fn load_config(path: Option<&Path>) -> Result<SolverConfig> {
    let Some(path) = path else {
        return Ok(SolverConfig::default());
    };
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    let config = if is_yaml {
        SolverConfig::from_yaml_file(path)
    } else {
        SolverConfig::load(path)
    };
    config.with_context(|| format!("failed to load config {}", path.display()))
}

fn parse_time_limit(secs: Option<f64>) -> Result<Option<Duration>> {
    match secs {
        None => Ok(None),
        Some(s) if s.is_finite() && s > 0.0 => Ok(Some(Duration::from_secs_f64(s))),
        Some(s) => bail!("--time-limit must be a positive number of seconds, got {s}"),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let strategies = select_strategies(&cli.algorithm)?;
    let config = load_config(cli.config.as_deref())?;
    let time_limit = parse_time_limit(cli.time_limit)?;

    let matrix = matrix_file::load(&cli.matrix_file)
        .with_context(|| format!("failed to load matrix {}", cli.matrix_file.display()))?;
    debug!(cities = matrix.size(), file = %cli.matrix_file.display(), "Loaded matrix");

    for (i, &strategy) in strategies.iter().enumerate() {
        let mut solver = Solver::from_config(config.clone().with_strategy(strategy));
        if let Some(limit) = time_limit {
            solver = solver.with_time_limit(limit);
        }

        let started = Instant::now();
        let result = solver
            .solve(&matrix)
            .with_context(|| format!("{strategy} failed on {}", cli.matrix_file.display()))?;
        let wall_time = started.elapsed();

        if i > 0 {
            println!();
        }
        println!(
            "{}",
            Report {
                file: &cli.matrix_file,
                result: &result,
                wall_time,
            }
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tourforge::console::init(cli.verbose);
    run(&cli)
}

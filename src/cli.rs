use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use countdown::solver::constants::DEFAULT_TOLERANCE;
use countdown::{Solver, SolverConfig, validate_numbers, validate_target};
use log::{info, warn};

/// Verbosity of the solver's diagnostics on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// Countdown - Solve the Countdown numbers game
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Find the arithmetic expression over six numbers closest to a target")]
#[command(version)]
pub struct CliArgs {
    /// Target number, from 100 to 999
    pub target: i64,

    /// The six numbers to use: 1 to 10 (at most twice each) or 25, 50, 75, 100 (once each)
    #[arg(required = true)]
    pub numbers: Vec<i64>,

    /// Number of parallel evaluators (default: available parallelism)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Maximum distance from the target for an answer
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: u64,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: i64,
    pub numbers: Vec<i64>,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

impl CliConfig {
    /// Check the round against the rules of the game and build the solver configuration
    pub fn from_args(args: CliArgs) -> Result<Self> {
        validate_target(args.target).context("Invalid target number")?;
        validate_numbers(&args.numbers).context("Invalid numbers to use")?;

        let defaults = SolverConfig::default();
        let workers = args.workers.unwrap_or(defaults.workers);
        let solver = SolverConfig {
            workers,
            tolerance: args.tolerance,
            channel_capacity: workers,
        };
        solver.validate().context("Invalid solver configuration")?;

        Ok(Self {
            target: args.target,
            numbers: args.numbers,
            solver,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
}

/// Route `log` output to stderr, capped at `log_level` unless `RUST_LOG` says otherwise
pub fn init_logging(log_level: LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.into())
        .try_init()
        .context("Failed to initialize logging")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(config.log_level)?;

    println!("-----------------------------------");
    println!("Target: {}, numbers: {:?}", config.target, config.numbers);

    let solver = Solver::new(config.solver);
    info!(
        "Searching with {} workers, tolerance {}",
        solver.config().workers,
        solver.config().tolerance
    );
    let started = Instant::now();

    let mut answer = None;
    for expr in solver.solve(config.target, &config.numbers) {
        println!("{}", expr.summary());
        answer = Some(expr);
    }

    println!("Finished in {}ms", started.elapsed().as_millis());

    match answer {
        Some(expr) => info!("Best answer uses {} numbers", expr.number_count()),
        None => {
            warn!("No expression within tolerance");
            println!("No result found");
        }
    }
    println!("-----------------------------------");

    Ok(())
}

//! Loss-Streak Probability Analyzer
//!
//! Computes, for each streak length up to a maximum, the probability of
//! that many consecutive losing trades within a fixed number of games,
//! and the deposit exposure the streak would cause.

mod probability;
mod report;

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::probability::{
    ProbabilityConfig, StreakCalculator, DEFAULT_MAX_STREAK, DEFAULT_MIN_PROBABILITY,
};

/// Loss-streak probability CLI.
#[derive(Parser)]
#[command(name = "streakrisk")]
#[command(about = "Calculate probability of losing streaks in trading", long_about = None)]
struct Cli {
    /// Number of games to simulate
    #[arg(short, long)]
    num_games: u32,

    /// Probability of winning a single game (0.0 to 1.0)
    #[arg(short, long)]
    win_probability: f64,

    /// Initial deposit amount in currency units (e.g. 10000)
    #[arg(short, long)]
    deposit_amount: f64,

    /// Risk amount per trade in currency units (e.g. 10)
    #[arg(short, long)]
    risk_per_trade: f64,

    /// Minimum probability threshold to show results
    #[arg(short, long, default_value_t = DEFAULT_MIN_PROBABILITY)]
    min_probability: f64,

    /// Maximum streak length to calculate
    #[arg(short = 's', long, default_value_t = DEFAULT_MAX_STREAK)]
    max_streak: u32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ProbabilityConfig::new(
        cli.num_games,
        cli.win_probability,
        Decimal::try_from(cli.deposit_amount)?,
        Decimal::try_from(cli.risk_per_trade)?,
        cli.min_probability,
        cli.max_streak,
    )?;

    info!(
        num_games = config.num_games,
        win_probability = config.win_probability,
        max_streak = config.max_streak,
        "Calculating streak probabilities"
    );

    let calculator = StreakCalculator::new(config.clone());
    let results = calculator.enumerate_streaks();
    debug!(retained = results.len(), "Sweep finished");

    let breakdowns = report::build_breakdowns(&config, &results);
    if cli.json {
        report::render_json(&breakdowns)?;
    } else {
        report::render_text(&config, &breakdowns);
    }

    Ok(())
}

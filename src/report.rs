//! Report rendering: turns streak probabilities into deposit exposure
//! figures and prints them.

use anyhow::Result;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::probability::{ProbabilityConfig, StreakResult};

/// Streaks risking at least this share of the deposit get a warning line.
const RISK_WARNING_PCT: f64 = 20.0;

/// Financial exposure implied by one streak result.
#[derive(Debug, Clone, Serialize)]
pub struct RiskBreakdown {
    pub streak_length: u32,
    pub probability: f64,
    /// Amount lost if the streak occurs: streak_length * risk_per_trade
    pub total_risk: Decimal,
    /// Deposit remaining after the streak
    pub remaining_balance: Decimal,
    /// Total risk as a percentage of the deposit
    pub risk_percentage: f64,
}

impl RiskBreakdown {
    /// Derive exposure figures for a streak result under a config.
    pub fn from_result(config: &ProbabilityConfig, result: &StreakResult) -> Self {
        let total_risk = config.risk_per_trade * Decimal::from(result.streak_length);
        let remaining_balance = config.deposit_amount - total_risk;
        let risk_percentage = (total_risk / config.deposit_amount)
            .to_f64()
            .unwrap_or(0.0)
            * 100.0;

        Self {
            streak_length: result.streak_length,
            probability: result.probability,
            total_risk,
            remaining_balance,
            risk_percentage,
        }
    }

    /// Whether this streak risks a significant share of the deposit.
    pub fn is_significant_risk(&self) -> bool {
        self.risk_percentage >= RISK_WARNING_PCT
    }
}

/// Derive exposure figures for every retained streak result.
pub fn build_breakdowns(config: &ProbabilityConfig, results: &[StreakResult]) -> Vec<RiskBreakdown> {
    results
        .iter()
        .map(|r| RiskBreakdown::from_result(config, r))
        .collect()
}

/// Print the human-readable report.
pub fn render_text(config: &ProbabilityConfig, breakdowns: &[RiskBreakdown]) {
    if breakdowns.is_empty() {
        println!(
            "\nNo streaks found with probability >= {:.1}%",
            config.min_probability * 100.0
        );
        println!("Try lowering the minimum probability threshold with -m");
        return;
    }

    println!(
        "\nResults for {} games with {:.1}% win probability:",
        config.num_games,
        config.win_probability * 100.0
    );
    println!("Initial deposit: {:.2}", config.deposit_amount);
    println!("Risk per trade: {:.2}", config.risk_per_trade);

    for b in breakdowns {
        println!(
            "\n{} losses in a row ({:.2}% probability):",
            b.streak_length,
            b.probability * 100.0
        );
        println!("- Total risk: {:.2} currency units", b.total_risk);
        println!("- Remaining balance: {:.2} currency units", b.remaining_balance);
        println!("- Risk percentage: {:.1}% of deposit", b.risk_percentage);

        if b.is_significant_risk() {
            println!("WARNING: This streak risks a significant portion of your deposit!");
        }
    }
}

/// Print the report as JSON.
pub fn render_json(breakdowns: &[RiskBreakdown]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(breakdowns)?);
    Ok(())
}

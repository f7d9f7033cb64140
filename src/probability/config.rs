//! Validated configuration for streak probability runs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default threshold below which streak results are dropped from reports.
pub const DEFAULT_MIN_PROBABILITY: f64 = 0.05;

/// Default longest streak length evaluated by the sweep.
pub const DEFAULT_MAX_STREAK: u32 = 20;

/// A constraint violated during configuration construction.
///
/// One variant per constraint so callers can report exactly which
/// input was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Win probability outside [0, 1].
    #[error("win probability must be between 0 and 1, got {value}")]
    WinProbabilityOutOfRange { value: f64 },

    /// Minimum probability threshold outside [0, 1].
    #[error("minimum probability must be between 0 and 1, got {value}")]
    MinProbabilityOutOfRange { value: f64 },

    /// Number of games must be positive.
    #[error("number of games must be positive")]
    NumGamesNotPositive,

    /// Maximum streak length must be positive.
    #[error("maximum streak must be positive")]
    MaxStreakNotPositive,

    /// Deposit amount must be positive.
    #[error("deposit amount must be positive, got {value}")]
    DepositNotPositive { value: Decimal },

    /// Risk per trade must be positive.
    #[error("risk per trade must be positive, got {value}")]
    RiskNotPositive { value: Decimal },

    /// Risk per trade cannot exceed the deposit.
    #[error("risk per trade {risk} cannot be greater than deposit amount {deposit}")]
    RiskExceedsDeposit { risk: Decimal, deposit: Decimal },
}

/// Immutable parameter set describing the trial sequence and reporting
/// thresholds.
///
/// Only obtainable through [`ProbabilityConfig::new`], which validates
/// every field; a value of this type always satisfies its invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbabilityConfig {
    /// Number of independent trades in the sequence
    pub num_games: u32,

    /// Probability of winning a single trade (0.0 to 1.0)
    pub win_probability: f64,

    /// Initial deposit in currency units
    pub deposit_amount: Decimal,

    /// Fixed amount at stake per trade in currency units
    pub risk_per_trade: Decimal,

    /// Streaks with probability below this are not reported (0.0 to 1.0)
    pub min_probability: f64,

    /// Longest streak length to evaluate
    pub max_streak: u32,
}

impl ProbabilityConfig {
    /// Build a validated configuration.
    ///
    /// Every constraint is checked independently; the first violation
    /// in field order is returned and no partially valid value exists.
    pub fn new(
        num_games: u32,
        win_probability: f64,
        deposit_amount: Decimal,
        risk_per_trade: Decimal,
        min_probability: f64,
        max_streak: u32,
    ) -> Result<Self, ConfigError> {
        let mut violations = Vec::new();

        if !(0.0..=1.0).contains(&win_probability) {
            violations.push(ConfigError::WinProbabilityOutOfRange {
                value: win_probability,
            });
        }
        if !(0.0..=1.0).contains(&min_probability) {
            violations.push(ConfigError::MinProbabilityOutOfRange {
                value: min_probability,
            });
        }
        if num_games == 0 {
            violations.push(ConfigError::NumGamesNotPositive);
        }
        if max_streak == 0 {
            violations.push(ConfigError::MaxStreakNotPositive);
        }
        if deposit_amount <= Decimal::ZERO {
            violations.push(ConfigError::DepositNotPositive {
                value: deposit_amount,
            });
        }
        if risk_per_trade <= Decimal::ZERO {
            violations.push(ConfigError::RiskNotPositive {
                value: risk_per_trade,
            });
        }
        if risk_per_trade > deposit_amount {
            violations.push(ConfigError::RiskExceedsDeposit {
                risk: risk_per_trade,
                deposit: deposit_amount,
            });
        }

        match violations.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(Self {
                num_games,
                win_probability,
                deposit_amount,
                risk_per_trade,
                min_probability,
                max_streak,
            }),
        }
    }

    /// Probability of losing a single trade.
    pub fn loss_probability(&self) -> f64 {
        1.0 - self.win_probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid() -> Result<ProbabilityConfig, ConfigError> {
        ProbabilityConfig::new(100, 0.55, dec!(10000), dec!(100), 0.05, 20)
    }

    #[test]
    fn test_valid_config() {
        let config = valid().unwrap();
        assert_eq!(config.num_games, 100);
        assert!((config.loss_probability() - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_win_probability_out_of_range() {
        let err = ProbabilityConfig::new(100, 1.5, dec!(10000), dec!(100), 0.05, 20).unwrap_err();
        assert!(matches!(err, ConfigError::WinProbabilityOutOfRange { .. }));

        let err = ProbabilityConfig::new(100, -0.1, dec!(10000), dec!(100), 0.05, 20).unwrap_err();
        assert!(matches!(err, ConfigError::WinProbabilityOutOfRange { .. }));
    }

    #[test]
    fn test_rejects_min_probability_out_of_range() {
        let err = ProbabilityConfig::new(100, 0.5, dec!(10000), dec!(100), 1.1, 20).unwrap_err();
        assert!(matches!(err, ConfigError::MinProbabilityOutOfRange { .. }));
    }

    #[test]
    fn test_rejects_zero_num_games() {
        let err = ProbabilityConfig::new(0, 0.5, dec!(10000), dec!(100), 0.05, 20).unwrap_err();
        assert_eq!(err, ConfigError::NumGamesNotPositive);
    }

    #[test]
    fn test_rejects_zero_max_streak() {
        let err = ProbabilityConfig::new(100, 0.5, dec!(10000), dec!(100), 0.05, 0).unwrap_err();
        assert_eq!(err, ConfigError::MaxStreakNotPositive);
    }

    #[test]
    fn test_rejects_non_positive_amounts() {
        let err = ProbabilityConfig::new(100, 0.5, dec!(0), dec!(100), 0.05, 20).unwrap_err();
        assert!(matches!(err, ConfigError::DepositNotPositive { .. }));

        let err = ProbabilityConfig::new(100, 0.5, dec!(10000), dec!(-5), 0.05, 20).unwrap_err();
        assert!(matches!(err, ConfigError::RiskNotPositive { .. }));
    }

    #[test]
    fn test_rejects_risk_exceeding_deposit() {
        let err = ProbabilityConfig::new(100, 0.5, dec!(50), dec!(100), 0.05, 20).unwrap_err();
        assert_eq!(
            err,
            ConfigError::RiskExceedsDeposit {
                risk: dec!(100),
                deposit: dec!(50),
            }
        );
    }

    #[test]
    fn test_boundary_probabilities_accepted() {
        assert!(ProbabilityConfig::new(10, 0.0, dec!(100), dec!(10), 0.0, 5).is_ok());
        assert!(ProbabilityConfig::new(10, 1.0, dec!(100), dec!(10), 1.0, 5).is_ok());
    }

    #[test]
    fn test_first_violation_wins_when_multiple_invalid() {
        // Both win_probability and num_games are invalid; the reported
        // kind must still name a genuinely violated constraint.
        let err = ProbabilityConfig::new(0, 2.0, dec!(10000), dec!(100), 0.05, 20).unwrap_err();
        assert!(matches!(err, ConfigError::WinProbabilityOutOfRange { .. }));
    }
}

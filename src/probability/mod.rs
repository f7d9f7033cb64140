//! Streak probability core: validated configuration and the DP engine.

mod calculator;
mod config;

pub use calculator::{StreakCalculator, StreakResult};
pub use config::{ConfigError, ProbabilityConfig, DEFAULT_MAX_STREAK, DEFAULT_MIN_PROBABILITY};

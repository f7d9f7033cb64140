//! Calculator for loss-streak probabilities using dynamic programming.

use serde::Serialize;
use tracing::debug;

use super::ProbabilityConfig;

/// Probability of at least one run of `streak_length` or more
/// consecutive losses within the configured number of games.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StreakResult {
    pub streak_length: u32,
    pub probability: f64,
}

/// Calculator for streak probabilities.
///
/// Each computation is a pure function of the configuration and the
/// requested streak length; calls share no state.
pub struct StreakCalculator {
    config: ProbabilityConfig,
}

impl StreakCalculator {
    /// Create a new calculator with given config.
    pub fn new(config: ProbabilityConfig) -> Self {
        Self { config }
    }

    /// Probability of at least one run of `streak_length` consecutive
    /// losses within `num_games` independent trades.
    ///
    /// Forward DP over (position, current consecutive losses). State
    /// `row[k]` holds the probability mass of prefixes ending with
    /// exactly `k` consecutive losses that have never reached the
    /// target streak. Mass that would move to `k == streak_length` is
    /// dropped rather than stored: the absorbing streak-reached state
    /// is modeled by omission, so the mass remaining after all games
    /// is exactly the probability the streak never occurred.
    ///
    /// `streak_length` must be >= 1. O(num_games * streak_length)
    /// time, O(streak_length) space (only adjacent positions interact,
    /// so two rows suffice).
    pub fn probability_of_streak(&self, streak_length: u32) -> f64 {
        let n = self.config.num_games as usize;
        let len = streak_length as usize;
        let p_win = self.config.win_probability;
        let p_loss = self.config.loss_probability();

        // row[k]: mass with exactly k consecutive losses, streak not yet hit
        let mut row = vec![0.0f64; len];
        let mut next = vec![0.0f64; len];
        row[0] = 1.0;

        for _ in 0..n {
            next.fill(0.0);

            for k in 0..len {
                let mass = row[k];
                if mass == 0.0 {
                    continue;
                }

                // Win: streak resets
                next[0] += p_win * mass;

                // Loss: streak extends, unless it completes the target
                // run, in which case the mass is absorbed (dropped)
                if k + 1 < len {
                    next[k + 1] += p_loss * mass;
                }
            }

            std::mem::swap(&mut row, &mut next);
        }

        let prob_no_streak: f64 = row.iter().sum();

        // FP drift near 0 or 1 must not leak out of [0, 1]
        (1.0 - prob_no_streak).clamp(0.0, 1.0)
    }

    /// Compute probabilities for every streak length up to
    /// `max_streak`, retaining those at or above `min_probability`.
    ///
    /// Results are ordered by increasing streak length, matching
    /// evaluation order.
    pub fn enumerate_streaks(&self) -> Vec<StreakResult> {
        let mut results = Vec::new();

        for streak_length in 1..=self.config.max_streak {
            let probability = self.probability_of_streak(streak_length);
            debug!(streak_length, probability, "computed streak probability");

            if probability >= self.config.min_probability {
                results.push(StreakResult {
                    streak_length,
                    probability,
                });
            }
        }

        results
    }
}

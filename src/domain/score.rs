//! Scoring math for resolved predictions and leaderboard decay.
//!
//! # Scoring System
//!
//! A resolved prediction earns `points = reward * time_weight` where:
//! - **Reward**: `1 - Brier`, the linear complement of the squared error
//!   between the stated probability and the outcome (0.0 to 1.0)
//! - **Time weight**: `exp(-lambda * frac)`, where `frac` is how far through
//!   the market window the prediction was made (1.0 at open, `exp(-lambda)`
//!   at close)
//!
//! Leaderboard scores are multiplied by a decay factor once an agent has been
//! inactive for longer than a threshold. The factor never drops below a floor.
//!
//! # Examples
//!
//! ```
//! use predarena::domain::prediction::Probability;
//! use predarena::domain::score::{reward, time_weight};
//!
//! let p = Probability::try_new(80).unwrap();
//! let points = reward(p, true) * time_weight(0.1, 1.0);
//!
//! assert!((points - 0.8686).abs() < 1e-4);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::AgentId;
use super::prediction::Probability;

/// Parameters for converting a prediction into points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringParams {
    /// Exponential rate applied to the fraction of the window elapsed.
    pub time_weight_lambda: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            time_weight_lambda: 1.0,
        }
    }
}

/// Parameters for penalizing inactive agents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayParams {
    /// Whole days of inactivity tolerated without penalty.
    pub inactivity_threshold_days: u32,
    /// Exponential decay rate per day beyond the threshold.
    pub decay_mu: f64,
    /// Lowest multiplier decay can reach.
    pub min_decay_factor: f64,
}

impl Default for DecayParams {
    fn default() -> Self {
        Self {
            inactivity_threshold_days: 30,
            decay_mu: 0.01,
            min_decay_factor: 0.5,
        }
    }
}

/// Squared error between the stated probability and the outcome.
///
/// 0.0 is a perfect forecast, 1.0 the worst possible one.
#[must_use]
pub fn brier_score(probability: Probability, outcome: bool) -> f64 {
    let o = if outcome { 1.0 } else { 0.0 };
    (probability.as_fraction() - o).powi(2)
}

/// Base reward in `[0, 1]`: `1 - brier_score`.
#[must_use]
pub fn reward(probability: Probability, outcome: bool) -> f64 {
    1.0 - brier_score(probability, outcome)
}

/// Fraction of the market window elapsed at `at`, clamped to `[0, 1]`.
///
/// Callers must ensure `close > open`; a degenerate window yields 1.0.
#[must_use]
pub fn time_fraction(open: DateTime<Utc>, close: DateTime<Utc>, at: DateTime<Utc>) -> f64 {
    let window = (close - open).num_milliseconds();
    if window <= 0 {
        return 1.0;
    }
    let elapsed = (at - open).num_milliseconds();
    (elapsed as f64 / window as f64).clamp(0.0, 1.0)
}

/// Multiplier rewarding early predictions: `exp(-lambda * frac)`.
#[must_use]
pub fn time_weight(frac: f64, lambda: f64) -> f64 {
    (-lambda * frac).exp()
}

/// Whole days between `last_submission` and `now`, rounded down.
#[must_use]
pub fn inactive_days(last_submission: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - last_submission).num_seconds().div_euclid(86_400)
}

/// Multiplier applied to a raw leaderboard score after `delta_days` idle.
#[must_use]
pub fn decay_factor(delta_days: i64, params: &DecayParams) -> f64 {
    let threshold = i64::from(params.inactivity_threshold_days);
    if delta_days < threshold {
        return 1.0;
    }
    let overdue = (delta_days - threshold) as f64;
    (-params.decay_mu * overdue)
        .exp()
        .max(params.min_decay_factor)
}

/// Points awarded for a single resolved prediction, with the factors that
/// produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    /// The agent who made the prediction.
    pub agent_id: AgentId,
    /// Squared error of the forecast.
    pub brier: f64,
    /// `1 - brier`.
    pub reward: f64,
    /// Fraction of the market window elapsed at submission.
    pub time_fraction: f64,
    /// Early-commitment multiplier.
    pub time_weight: f64,
    /// `reward * time_weight`.
    pub points: f64,
}

impl Award {
    /// Score a prediction made at `submitted_at` in a market open over
    /// `open..close` that resolved to `outcome`.
    #[must_use]
    pub fn compute(
        agent_id: AgentId,
        probability: Probability,
        outcome: bool,
        open: DateTime<Utc>,
        close: DateTime<Utc>,
        submitted_at: DateTime<Utc>,
        params: &ScoringParams,
    ) -> Self {
        let brier = brier_score(probability, outcome);
        let reward = 1.0 - brier;
        let time_fraction = time_fraction(open, close, submitted_at);
        let time_weight = time_weight(time_fraction, params.time_weight_lambda);
        Self {
            agent_id,
            brier,
            reward,
            time_fraction,
            time_weight,
            points: reward * time_weight,
        }
    }
}

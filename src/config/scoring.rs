//! Scoring, decay and standings configuration.

use serde::Deserialize;

use crate::domain::score::{DecayParams, ScoringParams};

/// Point calculation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Rate of the early-commitment bonus decay over a market's window.
    #[serde(default = "default_time_weight_lambda")]
    pub time_weight_lambda: f64,
}

const fn default_time_weight_lambda() -> f64 {
    1.0
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            time_weight_lambda: default_time_weight_lambda(),
        }
    }
}

impl From<&ScoringConfig> for ScoringParams {
    fn from(config: &ScoringConfig) -> Self {
        Self {
            time_weight_lambda: config.time_weight_lambda,
        }
    }
}

/// Inactivity decay settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DecayConfig {
    /// Days without a scored prediction before decay starts (default: 30).
    #[serde(default = "default_inactivity_threshold_days")]
    pub inactivity_threshold_days: u32,
    /// Decay rate per day beyond the threshold (default: 0.01).
    #[serde(default = "default_decay_mu")]
    pub decay_mu: f64,
    /// Floor for the decay multiplier (default: 0.5).
    #[serde(default = "default_min_decay_factor")]
    pub min_decay_factor: f64,
}

const fn default_inactivity_threshold_days() -> u32 {
    30
}

const fn default_decay_mu() -> f64 {
    0.01
}

const fn default_min_decay_factor() -> f64 {
    0.5
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            inactivity_threshold_days: default_inactivity_threshold_days(),
            decay_mu: default_decay_mu(),
            min_decay_factor: default_min_decay_factor(),
        }
    }
}

impl From<&DecayConfig> for DecayParams {
    fn from(config: &DecayConfig) -> Self {
        Self {
            inactivity_threshold_days: config.inactivity_threshold_days,
            decay_mu: config.decay_mu,
            min_decay_factor: config.min_decay_factor,
        }
    }
}

/// Leaderboard display settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StandingsConfig {
    /// Number of agents shown in standings (default: 10).
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

const fn default_top_n() -> usize {
    10
}

impl Default for StandingsConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

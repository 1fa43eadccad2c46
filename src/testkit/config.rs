//! Canonical test configurations.
//!
//! Single source of truth for parameter structs used across tests.

use crate::domain::score::{DecayParams, ScoringParams};

/// Scoring with the default `lambda = 1.0`.
pub fn scoring() -> ScoringParams {
    ScoringParams::default()
}

/// Decay with the default 30-day threshold, `mu = 0.01` and 0.5 floor.
pub fn decay() -> DecayParams {
    DecayParams::default()
}

/// Decay that never penalizes, for tests that only care about raw scores.
pub fn no_decay() -> DecayParams {
    DecayParams {
        inactivity_threshold_days: u32::MAX,
        decay_mu: 0.0,
        min_decay_factor: 1.0,
    }
}

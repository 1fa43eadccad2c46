//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! section is optional; omitted values fall back to their defaults.
//!
//! # Example
//!
//! ```no_run
//! use predarena::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("predarena.toml")?;
//!     config.init_logging()?;
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::scoring::{DecayConfig, ScoringConfig, StandingsConfig};
use crate::domain::score::{DecayParams, ScoringParams};
use crate::error::{ConfigError, Result};

/// Main configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Point calculation settings.
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Inactivity decay applied when ranking.
    #[serde(default)]
    pub decay: DecayConfig,

    /// Leaderboard display settings.
    #[serde(default)]
    pub standings: StandingsConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., a decay floor above 1)
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// Checks that all values are within acceptable ranges.
    fn validate(&self) -> Result<()> {
        let lambda = self.scoring.time_weight_lambda;
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "time_weight_lambda",
                reason: "must be a finite number >= 0".to_string(),
            }
            .into());
        }

        let mu = self.decay.decay_mu;
        if !mu.is_finite() || mu < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "decay_mu",
                reason: "must be a finite number >= 0".to_string(),
            }
            .into());
        }

        let floor = self.decay.min_decay_factor;
        if !(0.0..=1.0).contains(&floor) {
            return Err(ConfigError::InvalidValue {
                field: "min_decay_factor",
                reason: "must be between 0 and 1".to_string(),
            }
            .into());
        }

        if self.standings.top_n == 0 {
            return Err(ConfigError::InvalidValue {
                field: "top_n",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected 'pretty' or 'json', got '{}'", self.logging.format),
            }
            .into());
        }

        Ok(())
    }

    /// Scoring parameters for the resolver.
    #[must_use]
    pub fn scoring_params(&self) -> ScoringParams {
        ScoringParams::from(&self.scoring)
    }

    /// Decay parameters for the ranker.
    #[must_use]
    pub fn decay_params(&self) -> DecayParams {
        DecayParams::from(&self.decay)
    }

    /// Initialize logging with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Logging`] if a global subscriber is already
    /// installed.
    pub fn init_logging(&self) -> Result<()> {
        Ok(self.logging.init()?)
    }
}

//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::ConfigError;

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG` when set.
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Logging`] if a global subscriber is already
    /// installed.
    pub fn init(&self) -> Result<(), ConfigError> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => fmt().json().with_env_filter(filter).try_init(),
            _ => fmt().with_env_filter(filter).try_init(),
        }
        .map_err(ConfigError::Logging)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_existing_subscriber() {
        let config = LoggingConfig::default();
        // The first call may lose to another test installing a subscriber.
        let _ = config.init();

        let again = config.init();

        assert!(matches!(again, Err(ConfigError::Logging(_))));
    }
}

//! Configuration loading from TOML files.
//!
//! - [`settings`] - The top-level [`Config`] and its validation
//! - [`scoring`] - Scoring, decay and standings sections
//! - [`logging`] - Tracing subscriber setup

pub mod logging;
pub mod scoring;
pub mod settings;

pub use logging::LoggingConfig;
pub use scoring::{DecayConfig, ScoringConfig, StandingsConfig};
pub use settings::Config;

//! Predarena - Scoring and leaderboards for binary prediction markets.
//!
//! Agents submit whole-percent forecasts against yes/no markets. When a
//! market resolves, each forecast earns points for being calibrated and
//! early; points accumulate on a persistent leaderboard that is ranked with
//! an inactivity decay.
//!
//! # Architecture
//!
//! The crate is organised as ports and adapters around a pure core:
//!
//! - **`domain`** - Records, validation and the scoring core
//!   - `resolve` - Brier-based, time-weighted awards merged into the leaderboard
//!   - `rank` - Decayed, stably ordered leaderboard view
//! - **`port`** - Async store traits the core's collaborators implement
//! - **`adapter`** - `MemoryStore`, an in-memory implementation of every port
//! - **`application`** - Use-case services: markets, agents, submissions,
//!   resolution and standings
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Markets, predictions, agents and scoring
//! - [`error`] - Error types for the crate
//! - [`port`] - Persistence traits
//! - [`adapter`] - Port implementations
//! - [`application`] - Services composing ports and domain
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use predarena::domain::{
//!     rank, resolve, AgentId, DecayParams, Leaderboard, Market, MarketId, Prediction,
//!     Probability, ScoringParams,
//! };
//! use std::collections::HashMap;
//!
//! let open = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
//! let market = Market::try_new(
//!     MarketId::from("rain"),
//!     "Will it rain?",
//!     "https://weather.example",
//!     open,
//!     open + Duration::days(10),
//! )?;
//!
//! let mut predictions = vec![Prediction::new(
//!     AgentId::from("u1"),
//!     MarketId::from("rain"),
//!     Probability::try_new(80)?,
//!     open + Duration::days(1),
//! )];
//! let names = HashMap::from([(AgentId::from("u1"), "Cassandra".to_string())]);
//!
//! let resolution = resolve(
//!     &market,
//!     &mut predictions,
//!     true,
//!     Leaderboard::new(),
//!     &names,
//!     &ScoringParams::default(),
//! )?;
//! let standings = rank(&resolution.leaderboard, open + Duration::days(12), &DecayParams::default());
//!
//! assert_eq!(standings[0].agent_name, "Cassandra");
//! # Ok::<(), predarena::domain::DomainError>(())
//! ```

pub mod adapter;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

//! Port definitions for the collaborators the scoring core depends on.

pub mod store;

pub use store::{AgentDirectory, LeaderboardStore, MarketStore, PredictionStore};

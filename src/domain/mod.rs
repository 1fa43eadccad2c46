//! Prediction-market domain: records, validation and the scoring core.
//!
//! - [`resolution::resolve`] turns a resolved market's pending predictions
//!   into leaderboard awards
//! - [`ranking::rank`] produces the decayed, ordered leaderboard view
//!
//! Nothing in this module performs I/O.

pub mod agent;
pub mod error;
pub mod id;
pub mod leaderboard;
pub mod market;
pub mod prediction;
pub mod ranking;
pub mod resolution;
pub mod score;

pub use agent::Agent;
pub use error::DomainError;
pub use id::{AgentId, MarketId};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use market::{Market, ResolutionRecord};
pub use prediction::{Prediction, Probability};
pub use ranking::{rank, RankedEntry};
pub use resolution::{resolve, ParticipantLookup, Resolution};
pub use score::{Award, DecayParams, ScoringParams};

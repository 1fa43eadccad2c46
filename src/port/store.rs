//! Persistence ports for markets, predictions, agents and the leaderboard.
//!
//! # Implementation Notes
//!
//! - Implementations must be thread-safe (`Send + Sync`)
//! - Methods return futures that can be awaited
//! - Lookups return `Ok(None)` for absent records; `Err` is reserved for
//!   storage failures

use std::future::Future;

use crate::domain::{Agent, AgentId, Leaderboard, Market, MarketId, Prediction};
use crate::error::Result;

/// Storage operations for markets.
pub trait MarketStore: Send + Sync {
    /// Get a market by ID.
    fn get_market(&self, id: &MarketId) -> impl Future<Output = Result<Option<Market>>> + Send;

    /// Insert a new market. Returns false if the ID is already taken.
    fn insert_market(&self, market: &Market) -> impl Future<Output = Result<bool>> + Send;

    /// Overwrite an existing market record.
    fn update_market(&self, market: &Market) -> impl Future<Output = Result<()>> + Send;

    /// List all markets in creation order.
    fn list_markets(&self) -> impl Future<Output = Result<Vec<Market>>> + Send;
}

/// Storage operations for predictions.
pub trait PredictionStore: Send + Sync {
    /// Get the prediction an agent made for a market.
    fn get_prediction(
        &self,
        agent_id: &AgentId,
        market_id: &MarketId,
    ) -> impl Future<Output = Result<Option<Prediction>>> + Send;

    /// Insert a new prediction. Returns false if the agent already
    /// predicted this market.
    fn insert_prediction(
        &self,
        prediction: &Prediction,
    ) -> impl Future<Output = Result<bool>> + Send;

    /// All predictions for a market that have not been scored yet.
    fn unscored_for_market(
        &self,
        market_id: &MarketId,
    ) -> impl Future<Output = Result<Vec<Prediction>>> + Send;

    /// Number of predictions an agent has submitted across all markets.
    fn count_for_agent(&self, agent_id: &AgentId) -> impl Future<Output = Result<usize>> + Send;
}

/// Storage operations for the leaderboard.
///
/// The leaderboard is only ever written whole, never patched row by row.
pub trait LeaderboardStore: Send + Sync {
    /// Load the full leaderboard.
    fn load_leaderboard(&self) -> impl Future<Output = Result<Leaderboard>> + Send;

    /// Replace the full leaderboard.
    fn replace_leaderboard(
        &self,
        leaderboard: Leaderboard,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Persist the outcome of resolving `market` as one unit: overwrite the
    /// market record, flag `scored` agents' predictions for it and replace
    /// the leaderboard.
    ///
    /// Either all three writes land or none do. A failed commit must leave
    /// the market unresolved and its predictions unscored so the resolution
    /// can be retried.
    fn commit_resolution(
        &self,
        market: &Market,
        scored: &[AgentId],
        leaderboard: Leaderboard,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Participant directory.
pub trait AgentDirectory: Send + Sync {
    /// Get an agent by ID.
    fn get_agent(&self, id: &AgentId) -> impl Future<Output = Result<Option<Agent>>> + Send;

    /// Register a new agent. Returns false if the ID is already registered.
    fn insert_agent(&self, agent: &Agent) -> impl Future<Output = Result<bool>> + Send;

    /// Remove a registration. Returns false if the ID was not registered.
    ///
    /// Predictions already submitted by the agent are kept.
    fn remove_agent(&self, id: &AgentId) -> impl Future<Output = Result<bool>> + Send;

    /// List all registered agents.
    fn list_agents(&self) -> impl Future<Output = Result<Vec<Agent>>> + Send;
}

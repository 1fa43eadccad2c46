//! Market resolution use case.
//!
//! Resolving a market fetches everything the scoring core needs, runs
//! [`resolve`](crate::domain::resolve), then hands the resolved market,
//! the scored flags and the full leaderboard to the store in a single
//! [`commit_resolution`](crate::port::LeaderboardStore::commit_resolution).
//! A failed commit leaves nothing behind, so the call can be retried.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{self, AgentId, Market, MarketId, ResolutionRecord, ScoringParams};
use crate::error::{ArenaError, Result};
use crate::port::{AgentDirectory, LeaderboardStore, MarketStore, PredictionStore};

/// Summary of a completed resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionReport {
    /// The resolved market.
    pub market_id: MarketId,
    /// The recorded outcome.
    pub outcome: bool,
    /// Number of predictions scored.
    pub processed: usize,
    /// Agents whose predictions were scored without leaderboard credit.
    pub orphaned: Vec<AgentId>,
    /// Total points credited to the leaderboard.
    pub awarded_points: f64,
}

/// Resolves markets and folds their predictions into the leaderboard.
///
/// Callers must not resolve the same market concurrently; the service
/// fails fast on markets already flagged resolved but does not lock.
pub struct ResolutionService<S> {
    store: Arc<S>,
    params: ScoringParams,
}

impl<S> ResolutionService<S>
where
    S: MarketStore + PredictionStore + LeaderboardStore + AgentDirectory,
{
    /// Create a new resolution service.
    pub const fn new(store: Arc<S>, params: ScoringParams) -> Self {
        Self { store, params }
    }

    /// Record `outcome` for `market_id` and score its pending predictions.
    ///
    /// # Errors
    ///
    /// - [`ArenaError::MarketNotFound`] if the market does not exist
    /// - [`ArenaError::AlreadyResolved`] if it was resolved before; nothing
    ///   is recomputed
    /// - `DomainError::InvalidMarketWindow` if the stored window is empty;
    ///   nothing is written
    /// - any store error from the commit; nothing is written and a retry
    ///   scores the same predictions again
    pub async fn resolve(
        &self,
        market_id: &MarketId,
        outcome: bool,
        resolution_source: impl Into<String>,
        resolution_note: impl Into<String>,
    ) -> Result<ResolutionReport> {
        let mut market = self.load_unresolved(market_id).await?;
        market.validate_window()?;

        let mut predictions = self.store.unscored_for_market(market_id).await?;
        let leaderboard = self.store.load_leaderboard().await?;
        let directory = self.directory_for(&predictions).await?;

        let resolution = domain::resolve(
            &market,
            &mut predictions,
            outcome,
            leaderboard,
            &directory,
            &self.params,
        )?;
        let awarded_points = resolution.awarded_points();

        let scored: Vec<AgentId> = predictions
            .iter()
            .filter(|p| p.is_scored())
            .map(|p| p.agent_id().clone())
            .collect();
        market.mark_resolved(outcome, ResolutionRecord::new(resolution_source, resolution_note))?;
        self.store
            .commit_resolution(&market, &scored, resolution.leaderboard)
            .await?;

        if !resolution.orphaned.is_empty() {
            warn!(
                market_id = %market_id,
                orphaned = resolution.orphaned.len(),
                "Some predictions belong to unregistered agents"
            );
        }
        info!(
            market_id = %market_id,
            outcome,
            processed = resolution.processed,
            awarded_points,
            "Market resolved"
        );

        Ok(ResolutionReport {
            market_id: market_id.clone(),
            outcome,
            processed: resolution.processed,
            orphaned: resolution.orphaned,
            awarded_points,
        })
    }

    async fn load_unresolved(&self, market_id: &MarketId) -> Result<Market> {
        let market = self
            .store
            .get_market(market_id)
            .await?
            .ok_or_else(|| ArenaError::MarketNotFound {
                market_id: market_id.clone(),
            })?;
        if market.is_resolved() {
            return Err(ArenaError::AlreadyResolved {
                market_id: market_id.clone(),
            }
            .into());
        }
        Ok(market)
    }

    /// Display names for every agent appearing in `predictions`.
    async fn directory_for(
        &self,
        predictions: &[domain::Prediction],
    ) -> Result<HashMap<AgentId, String>> {
        let mut names = HashMap::new();
        for prediction in predictions {
            let id = prediction.agent_id();
            if names.contains_key(id) {
                continue;
            }
            if let Some(agent) = self.store.get_agent(id).await? {
                names.insert(id.clone(), agent.name().to_string());
            }
        }
        Ok(names)
    }
}

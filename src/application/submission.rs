//! Accepting forecasts.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{AgentId, MarketId, Prediction, Probability};
use crate::error::{ArenaError, Result};
use crate::port::{AgentDirectory, MarketStore, PredictionStore};

/// Validates and records predictions.
pub struct SubmissionService<S> {
    store: Arc<S>,
}

impl<S> SubmissionService<S>
where
    S: AgentDirectory + MarketStore + PredictionStore,
{
    /// Create a new submission service backed by `store`.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Record `agent_id`'s forecast of `probability` percent for `market_id`,
    /// stamped at `at`.
    ///
    /// Checks run in order: agent registered, probability in range, market
    /// exists and is active, no earlier prediction by the same agent.
    ///
    /// # Errors
    ///
    /// - [`ArenaError::AgentNotRegistered`]
    /// - `DomainError::OutOfRangeProbability`
    /// - [`ArenaError::MarketNotFound`] / [`ArenaError::MarketClosed`]
    /// - [`ArenaError::DuplicatePrediction`]
    pub async fn submit(
        &self,
        agent_id: AgentId,
        market_id: MarketId,
        probability: i64,
        at: DateTime<Utc>,
    ) -> Result<Prediction> {
        let agent = self
            .store
            .get_agent(&agent_id)
            .await?
            .ok_or_else(|| ArenaError::AgentNotRegistered {
                agent_id: agent_id.clone(),
            })?;

        let probability = Probability::try_new(probability)?;

        let market = self
            .store
            .get_market(&market_id)
            .await?
            .ok_or_else(|| ArenaError::MarketNotFound {
                market_id: market_id.clone(),
            })?;
        if !market.is_active() {
            return Err(ArenaError::MarketClosed { market_id }.into());
        }

        let prediction = Prediction::new(agent_id, market_id, probability, at);
        if !self.store.insert_prediction(&prediction).await? {
            return Err(ArenaError::DuplicatePrediction {
                agent_id: prediction.agent_id().clone(),
                market_id: prediction.market_id().clone(),
            }
            .into());
        }

        info!(
            agent_id = %prediction.agent_id(),
            agent_name = agent.name(),
            market_id = %prediction.market_id(),
            probability = %probability,
            "Prediction locked in"
        );
        Ok(prediction)
    }
}

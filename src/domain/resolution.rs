//! Scoring a market's pending predictions at resolution time.
//!
//! [`resolve`] is pure computation over pre-fetched data: it scores every
//! unscored prediction belonging to the market, flags each as scored and
//! merges the points into a leaderboard copy. Persisting the results and
//! flipping the market's own state is the caller's job.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::agent::Agent;
use super::error::DomainError;
use super::id::AgentId;
use super::leaderboard::Leaderboard;
use super::market::Market;
use super::prediction::Prediction;
use super::score::{Award, ScoringParams};

/// Read access to agent display names.
pub trait ParticipantLookup {
    /// The agent's display name, or `None` if the agent is unknown.
    fn agent_name(&self, agent_id: &AgentId) -> Option<&str>;
}

impl ParticipantLookup for HashMap<AgentId, String> {
    fn agent_name(&self, agent_id: &AgentId) -> Option<&str> {
        self.get(agent_id).map(String::as_str)
    }
}

impl ParticipantLookup for HashMap<AgentId, Agent> {
    fn agent_name(&self, agent_id: &AgentId) -> Option<&str> {
        self.get(agent_id).map(Agent::name)
    }
}

/// Result of scoring one market.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Leaderboard with this market's awards merged in.
    pub leaderboard: Leaderboard,
    /// Number of predictions scored by this call.
    pub processed: usize,
    /// Per-prediction breakdown, in input order.
    pub awards: Vec<Award>,
    /// Agents whose predictions were scored but not credited because they
    /// are missing from the participant directory.
    pub orphaned: Vec<AgentId>,
}

impl Resolution {
    /// Sum of points credited to the leaderboard.
    #[must_use]
    pub fn awarded_points(&self) -> f64 {
        self.awards
            .iter()
            .filter(|a| !self.orphaned.contains(&a.agent_id))
            .map(|a| a.points)
            .sum()
    }
}

/// Score the unscored predictions of `market` against `outcome`.
///
/// Predictions that are already scored, or that belong to another market,
/// are left untouched and not counted. Calling this again on the same
/// slice is therefore a no-op with `processed == 0`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidMarketWindow`] if the market's close time
/// is not after its open time. Nothing is scored in that case.
pub fn resolve<D>(
    market: &Market,
    predictions: &mut [Prediction],
    outcome: bool,
    mut leaderboard: Leaderboard,
    directory: &D,
    params: &ScoringParams,
) -> Result<Resolution, DomainError>
where
    D: ParticipantLookup + ?Sized,
{
    market.validate_window()?;

    let mut awards = Vec::new();
    let mut orphaned = Vec::new();

    for prediction in predictions
        .iter_mut()
        .filter(|p| !p.is_scored() && p.market_id() == market.id())
    {
        let award = Award::compute(
            prediction.agent_id().clone(),
            prediction.probability(),
            outcome,
            market.open_time(),
            market.close_time(),
            prediction.submitted_at(),
            params,
        );
        prediction.mark_scored();

        match directory.agent_name(prediction.agent_id()) {
            Some(name) => {
                debug!(
                    agent_id = %prediction.agent_id(),
                    probability = %prediction.probability(),
                    points = award.points,
                    "Prediction scored"
                );
                leaderboard.award(
                    prediction.agent_id(),
                    name,
                    award.points,
                    prediction.submitted_at(),
                );
            }
            None => {
                warn!(
                    agent_id = %prediction.agent_id(),
                    market_id = %market.id(),
                    "Orphaned prediction scored without leaderboard credit"
                );
                orphaned.push(prediction.agent_id().clone());
            }
        }

        awards.push(award);
    }

    Ok(Resolution {
        leaderboard,
        processed: awards.len(),
        awards,
        orphaned,
    })
}

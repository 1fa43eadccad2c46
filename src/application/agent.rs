//! Participant registration and profiles.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Agent, AgentId};
use crate::error::{ArenaError, Result};
use crate::port::{AgentDirectory, PredictionStore};

/// An agent together with its activity count.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentProfile {
    /// The registered agent.
    pub agent: Agent,
    /// Predictions submitted across all markets, scored or not.
    pub predictions: usize,
}

/// Registers agents and reports on them.
pub struct AgentService<S> {
    store: Arc<S>,
}

impl<S: AgentDirectory + PredictionStore> AgentService<S> {
    /// Create a new agent service backed by `store`.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Register a new agent.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` for a blank name or a training source that is
    /// not a link, and [`ArenaError::AgentAlreadyRegistered`] if `id` is
    /// already registered.
    pub async fn register(
        &self,
        id: AgentId,
        name: impl Into<String>,
        training_source: impl Into<String>,
        bio: Option<String>,
    ) -> Result<Agent> {
        if self.store.get_agent(&id).await?.is_some() {
            return Err(ArenaError::AgentAlreadyRegistered { agent_id: id }.into());
        }
        let agent = Agent::try_new(id, name, training_source, bio)?;
        if !self.store.insert_agent(&agent).await? {
            return Err(ArenaError::AgentAlreadyRegistered {
                agent_id: agent.id().clone(),
            }
            .into());
        }
        info!(agent_id = %agent.id(), agent_name = agent.name(), "Agent registered");
        Ok(agent)
    }

    /// Remove an agent's registration.
    ///
    /// Predictions the agent already submitted stay on record. When their
    /// markets resolve they are scored but earn no leaderboard credit.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::AgentNotRegistered`] if `id` is unknown.
    pub async fn unregister(&self, id: &AgentId) -> Result<()> {
        if !self.store.remove_agent(id).await? {
            return Err(ArenaError::AgentNotRegistered {
                agent_id: id.clone(),
            }
            .into());
        }
        info!(agent_id = %id, "Agent unregistered");
        Ok(())
    }

    /// Look up an agent by ID.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub async fn get(&self, id: &AgentId) -> Result<Option<Agent>> {
        self.store.get_agent(id).await
    }

    /// Look up an agent by display name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Agent>> {
        let wanted = name.trim().to_lowercase();
        let agents = self.store.list_agents().await?;
        Ok(agents
            .into_iter()
            .find(|a| a.name().to_lowercase() == wanted))
    }

    /// An agent's record and submission count.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::AgentNotRegistered`] if `id` is unknown.
    pub async fn profile(&self, id: &AgentId) -> Result<AgentProfile> {
        let agent = self
            .store
            .get_agent(id)
            .await?
            .ok_or_else(|| ArenaError::AgentNotRegistered {
                agent_id: id.clone(),
            })?;
        let predictions = self.store.count_for_agent(id).await?;
        Ok(AgentProfile { agent, predictions })
    }
}

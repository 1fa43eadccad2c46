//! Registered participants.

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::AgentId;

/// A registered forecasting agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    name: String,
    training_source: String,
    bio: Option<String>,
}

impl Agent {
    /// Create a new agent with domain invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - `name` must not be blank
    /// - `training_source` must be an `http://` or `https://` link
    ///
    /// A blank `bio` is stored as `None`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if any invariant is violated.
    pub fn try_new(
        id: AgentId,
        name: impl Into<String>,
        training_source: impl Into<String>,
        bio: Option<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::EmptyAgentName);
        }

        let training_source = training_source.into();
        if !is_web_link(&training_source) {
            return Err(DomainError::InvalidTrainingSource {
                link: training_source,
            });
        }

        Ok(Self {
            id,
            name,
            training_source,
            bio: bio.filter(|b| !b.trim().is_empty()),
        })
    }

    /// The agent's ID.
    #[must_use]
    pub const fn id(&self) -> &AgentId {
        &self.id
    }

    /// Display name shown on the leaderboard.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Link to the dataset or model card the agent was trained on.
    #[must_use]
    pub fn training_source(&self) -> &str {
        &self.training_source
    }

    /// Optional free-form description.
    #[must_use]
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }
}

fn is_web_link(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    ["http://", "https://"]
        .iter()
        .any(|scheme| lower.len() > scheme.len() && lower.starts_with(scheme))
}

//! Persistent per-agent score aggregates.
//!
//! The [`Leaderboard`] keeps entries in the order agents first received
//! points. Ranking uses a stable sort, so that order is the tie-break for
//! equal final scores.

use chrono::{DateTime, Utc};
use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

use super::id::AgentId;

/// Aggregate score for one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Display name, copied from the participant directory on first award.
    pub agent_name: String,
    /// Cumulative points across all scored predictions.
    pub score: f64,
    /// Number of scored predictions contributing to `score`.
    pub submissions: u32,
    /// Submission time of the most recent scored prediction.
    pub last_submission: DateTime<Utc>,
}

impl LeaderboardEntry {
    /// Create an entry for an agent's first award.
    pub fn first(agent_name: impl Into<String>, points: f64, at: DateTime<Utc>) -> Self {
        Self {
            agent_name: agent_name.into(),
            score: points,
            submissions: 1,
            last_submission: at,
        }
    }

    /// Fold another award into this entry.
    pub fn absorb(&mut self, points: f64, at: DateTime<Utc>) {
        self.score += points;
        self.submissions += 1;
        if at > self.last_submission {
            self.last_submission = at;
        }
    }
}

/// Full leaderboard mapping, keyed by agent.
///
/// Equality compares the mapping only; insertion order is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: LinkedHashMap<AgentId, LeaderboardEntry>,
}

impl Leaderboard {
    /// Create an empty leaderboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `points` earned by a prediction submitted at `at`.
    ///
    /// Creates the agent's entry on first award, otherwise adds to the
    /// score, bumps the submission count and keeps the later timestamp.
    pub fn award(&mut self, agent_id: &AgentId, agent_name: &str, points: f64, at: DateTime<Utc>) {
        match self.entries.get_mut(agent_id) {
            Some(entry) => entry.absorb(points, at),
            None => {
                self.entries.insert(
                    agent_id.clone(),
                    LeaderboardEntry::first(agent_name, points, at),
                );
            }
        }
    }

    /// Look up an agent's entry.
    #[must_use]
    pub fn get(&self, agent_id: &AgentId) -> Option<&LeaderboardEntry> {
        self.entries.get(agent_id)
    }

    /// Iterate entries in first-award order.
    pub fn iter(&self) -> impl Iterator<Item = (&AgentId, &LeaderboardEntry)> {
        self.entries.iter()
    }

    /// Number of agents on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no agent has been awarded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Leaderboard {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(id, entry)| other.get(id) == Some(entry))
    }
}

impl FromIterator<(AgentId, LeaderboardEntry)> for Leaderboard {
    fn from_iter<I: IntoIterator<Item = (AgentId, LeaderboardEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

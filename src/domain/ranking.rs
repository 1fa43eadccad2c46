//! Decayed, ordered view of the leaderboard.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::AgentId;
use super::leaderboard::Leaderboard;
use super::score::{decay_factor, inactive_days, DecayParams};

/// One row of the ranked leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// The ranked agent.
    pub agent_id: AgentId,
    /// Display name.
    pub agent_name: String,
    /// Cumulative score as stored.
    pub raw_score: f64,
    /// Inactivity multiplier applied to `raw_score`.
    pub decay: f64,
    /// `raw_score * decay`, the ranking key.
    pub final_score: f64,
    /// Number of scored predictions.
    pub submissions: u32,
}

/// Rank every leaderboard entry by decayed score, highest first.
///
/// The sort is stable: entries with equal final scores keep the
/// leaderboard's first-award order. Truncating to a top-N is left to the
/// caller. Never mutates the leaderboard.
///
/// The view is computed on demand at `now` and returned as an owned,
/// already sorted `Vec`; ordering needs every entry, so nothing is
/// deferred to iteration time.
#[must_use]
pub fn rank(leaderboard: &Leaderboard, now: DateTime<Utc>, params: &DecayParams) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = leaderboard
        .iter()
        .map(|(agent_id, entry)| {
            let decay = decay_factor(inactive_days(entry.last_submission, now), params);
            RankedEntry {
                agent_id: agent_id.clone(),
                agent_name: entry.agent_name.clone(),
                raw_score: entry.score,
                decay,
                final_score: entry.score * decay,
                submissions: entry.submissions,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
    ranked
}

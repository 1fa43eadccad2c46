//! Leaderboard display use case.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{rank, DecayParams, RankedEntry};
use crate::error::Result;
use crate::port::LeaderboardStore;

/// Produces the decayed, truncated leaderboard. Read-only.
pub struct StandingsService<S> {
    store: Arc<S>,
    params: DecayParams,
    top_n: usize,
}

impl<S: LeaderboardStore> StandingsService<S> {
    /// Create a new standings service showing `top_n` agents by default.
    pub const fn new(store: Arc<S>, params: DecayParams, top_n: usize) -> Self {
        Self {
            store,
            params,
            top_n,
        }
    }

    /// The configured top-N standings as of `now`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub async fn standings(&self, now: DateTime<Utc>) -> Result<Vec<RankedEntry>> {
        self.top(now, self.top_n).await
    }

    /// The best `limit` agents as of `now`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub async fn top(&self, now: DateTime<Utc>, limit: usize) -> Result<Vec<RankedEntry>> {
        let leaderboard = self.store.load_leaderboard().await?;
        let mut ranked = rank(&leaderboard, now, &self.params);
        debug!(agents = ranked.len(), limit, "Leaderboard ranked");
        ranked.truncate(limit);
        Ok(ranked)
    }
}

//! In-memory store implementation.
//!
//! Backs every persistence port with `parking_lot` locks. Records keep
//! their insertion order so listings are deterministic.
//!
//! Operations that span several maps take the write locks in field order
//! (markets, predictions, leaderboard).

use hashlink::LinkedHashMap;
use parking_lot::RwLock;

use crate::domain::{Agent, AgentId, Leaderboard, Market, MarketId, Prediction};
use crate::error::{Error, Result};
use crate::port::{AgentDirectory, LeaderboardStore, MarketStore, PredictionStore};

type PredictionKey = (AgentId, MarketId);

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    markets: RwLock<LinkedHashMap<MarketId, Market>>,
    predictions: RwLock<LinkedHashMap<PredictionKey, Prediction>>,
    agents: RwLock<LinkedHashMap<AgentId, Agent>>,
    leaderboard: RwLock<Leaderboard>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MarketStore for MemoryStore {
    async fn get_market(&self, id: &MarketId) -> Result<Option<Market>> {
        Ok(self.markets.read().get(id).cloned())
    }

    async fn insert_market(&self, market: &Market) -> Result<bool> {
        let mut markets = self.markets.write();
        if markets.contains_key(market.id()) {
            return Ok(false);
        }
        markets.insert(market.id().clone(), market.clone());
        Ok(true)
    }

    async fn update_market(&self, market: &Market) -> Result<()> {
        match self.markets.write().get_mut(market.id()) {
            Some(slot) => {
                *slot = market.clone();
                Ok(())
            }
            None => Err(Error::Store(format!("market {} does not exist", market.id()))),
        }
    }

    async fn list_markets(&self) -> Result<Vec<Market>> {
        Ok(self.markets.read().values().cloned().collect())
    }
}

impl PredictionStore for MemoryStore {
    async fn get_prediction(
        &self,
        agent_id: &AgentId,
        market_id: &MarketId,
    ) -> Result<Option<Prediction>> {
        let key = (agent_id.clone(), market_id.clone());
        Ok(self.predictions.read().get(&key).cloned())
    }

    async fn insert_prediction(&self, prediction: &Prediction) -> Result<bool> {
        let key = (
            prediction.agent_id().clone(),
            prediction.market_id().clone(),
        );
        let mut predictions = self.predictions.write();
        if predictions.contains_key(&key) {
            return Ok(false);
        }
        predictions.insert(key, prediction.clone());
        Ok(true)
    }

    async fn unscored_for_market(&self, market_id: &MarketId) -> Result<Vec<Prediction>> {
        Ok(self
            .predictions
            .read()
            .values()
            .filter(|p| p.market_id() == market_id && !p.is_scored())
            .cloned()
            .collect())
    }

    async fn count_for_agent(&self, agent_id: &AgentId) -> Result<usize> {
        Ok(self
            .predictions
            .read()
            .keys()
            .filter(|(agent, _)| agent == agent_id)
            .count())
    }
}

impl LeaderboardStore for MemoryStore {
    async fn load_leaderboard(&self) -> Result<Leaderboard> {
        Ok(self.leaderboard.read().clone())
    }

    async fn replace_leaderboard(&self, leaderboard: Leaderboard) -> Result<()> {
        *self.leaderboard.write() = leaderboard;
        Ok(())
    }

    async fn commit_resolution(
        &self,
        market: &Market,
        scored: &[AgentId],
        leaderboard: Leaderboard,
    ) -> Result<()> {
        let mut markets = self.markets.write();
        let mut predictions = self.predictions.write();
        let mut board = self.leaderboard.write();

        let Some(slot) = markets.get_mut(market.id()) else {
            return Err(Error::Store(format!("market {} does not exist", market.id())));
        };

        *slot = market.clone();
        for agent_id in scored {
            let key = (agent_id.clone(), market.id().clone());
            if let Some(prediction) = predictions.get_mut(&key) {
                prediction.mark_scored();
            }
        }
        *board = leaderboard;
        Ok(())
    }
}

impl AgentDirectory for MemoryStore {
    async fn get_agent(&self, id: &AgentId) -> Result<Option<Agent>> {
        Ok(self.agents.read().get(id).cloned())
    }

    async fn insert_agent(&self, agent: &Agent) -> Result<bool> {
        let mut agents = self.agents.write();
        if agents.contains_key(agent.id()) {
            return Ok(false);
        }
        agents.insert(agent.id().clone(), agent.clone());
        Ok(true)
    }

    async fn remove_agent(&self, id: &AgentId) -> Result<bool> {
        Ok(self.agents.write().remove(id).is_some())
    }

    async fn list_agents(&self) -> Result<Vec<Agent>> {
        Ok(self.agents.read().values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Probability, ResolutionRecord};
    use chrono::{Duration, TimeZone, Utc};

    fn make_market(id: &str) -> Market {
        let open = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Market::try_new(MarketId::from(id), "Q?", "https://q.example", open, open + Duration::days(7))
            .unwrap()
    }

    fn make_prediction(agent: &str, market: &str) -> Prediction {
        Prediction::new(
            AgentId::from(agent),
            MarketId::from(market),
            Probability::try_new(60).unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn insert_market_rejects_duplicate_ids() {
        let store = MemoryStore::new();
        assert!(store.insert_market(&make_market("m1")).await.unwrap());
        assert!(!store.insert_market(&make_market("m1")).await.unwrap());
        assert_eq!(store.list_markets().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_market_requires_existing_record() {
        let store = MemoryStore::new();
        let result = store.update_market(&make_market("missing")).await;
        assert!(matches!(result, Err(Error::Store(_))));
    }

    #[tokio::test]
    async fn prediction_crud_operations() {
        let store = MemoryStore::new();
        assert!(store.insert_prediction(&make_prediction("a", "m1")).await.unwrap());
        assert!(!store.insert_prediction(&make_prediction("a", "m1")).await.unwrap());
        assert!(store.insert_prediction(&make_prediction("b", "m1")).await.unwrap());
        assert!(store.insert_prediction(&make_prediction("a", "m2")).await.unwrap());

        assert_eq!(store.unscored_for_market(&MarketId::from("m1")).await.unwrap().len(), 2);
        assert_eq!(store.count_for_agent(&AgentId::from("a")).await.unwrap(), 2);

        let stored = store
            .get_prediction(&AgentId::from("b"), &MarketId::from("m1"))
            .await
            .unwrap()
            .unwrap();
        assert!(!stored.is_scored());
        assert!(store
            .get_prediction(&AgentId::from("b"), &MarketId::from("m2"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn commit_resolution_writes_market_flags_and_board_together() {
        let store = MemoryStore::new();
        let mut market = make_market("m1");
        store.insert_market(&market).await.unwrap();
        store.insert_prediction(&make_prediction("a", "m1")).await.unwrap();
        store.insert_prediction(&make_prediction("b", "m1")).await.unwrap();

        market
            .mark_resolved(true, ResolutionRecord::new("https://src", "yes"))
            .unwrap();
        let mut board = Leaderboard::new();
        board.award(&AgentId::from("a"), "A", 0.5, Utc::now());

        store
            .commit_resolution(&market, &[AgentId::from("a")], board.clone())
            .await
            .unwrap();

        let stored = store.get_market(&MarketId::from("m1")).await.unwrap().unwrap();
        assert!(stored.is_resolved());
        let pending = store.unscored_for_market(&MarketId::from("m1")).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].agent_id().as_str(), "b");
        assert_eq!(store.load_leaderboard().await.unwrap(), board);
    }

    #[tokio::test]
    async fn commit_resolution_for_unknown_market_writes_nothing() {
        let store = MemoryStore::new();
        store.insert_prediction(&make_prediction("a", "m1")).await.unwrap();
        let mut board = Leaderboard::new();
        board.award(&AgentId::from("a"), "A", 0.5, Utc::now());

        let result = store
            .commit_resolution(&make_market("m1"), &[AgentId::from("a")], board)
            .await;

        assert!(matches!(result, Err(Error::Store(_))));
        assert_eq!(store.unscored_for_market(&MarketId::from("m1")).await.unwrap().len(), 1);
        assert!(store.load_leaderboard().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_agent_reports_whether_it_existed() {
        let store = MemoryStore::new();
        let agent = Agent::try_new(AgentId::from("a"), "A", "https://a.io", None).unwrap();
        store.insert_agent(&agent).await.unwrap();

        assert!(store.remove_agent(&AgentId::from("a")).await.unwrap());
        assert!(!store.remove_agent(&AgentId::from("a")).await.unwrap());
        assert!(store.get_agent(&AgentId::from("a")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn replace_leaderboard_swaps_whole_mapping() {
        let store = MemoryStore::new();
        let at = Utc::now();

        let mut first = Leaderboard::new();
        first.award(&AgentId::from("a"), "A", 1.0, at);
        store.replace_leaderboard(first).await.unwrap();

        let mut second = Leaderboard::new();
        second.award(&AgentId::from("b"), "B", 2.0, at);
        store.replace_leaderboard(second.clone()).await.unwrap();

        let loaded = store.load_leaderboard().await.unwrap();
        assert_eq!(loaded, second);
        assert!(loaded.get(&AgentId::from("a")).is_none());
    }
}

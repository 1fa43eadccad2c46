//! Pre-seeded in-memory stores.

use crate::adapter::store::MemoryStore;
use crate::domain::{Agent, Market, Prediction};
use crate::port::{AgentDirectory, MarketStore, PredictionStore};

/// Build a [`MemoryStore`] holding the given records.
///
/// # Panics
///
/// Panics if a record is rejected as a duplicate.
pub async fn seeded(markets: &[Market], agents: &[Agent], predictions: &[Prediction]) -> MemoryStore {
    let store = MemoryStore::new();
    for market in markets {
        assert!(store.insert_market(market).await.expect("insert market"));
    }
    for agent in agents {
        assert!(store.insert_agent(agent).await.expect("insert agent"));
    }
    for prediction in predictions {
        assert!(store
            .insert_prediction(prediction)
            .await
            .expect("insert prediction"));
    }
    store
}

//! Market lifecycle use cases.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{Market, MarketId};
use crate::error::{ArenaError, Result};
use crate::port::MarketStore;

/// Creates and lists markets.
pub struct MarketService<S> {
    store: Arc<S>,
}

impl<S: MarketStore> MarketService<S> {
    /// Create a new market service backed by `store`.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Open a new market for predictions.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMarketWindow` if `close_time` is not
    /// after `open_time`, or [`ArenaError::MarketAlreadyExists`] if the ID is
    /// taken.
    pub async fn create(
        &self,
        id: MarketId,
        title: impl Into<String>,
        source: impl Into<String>,
        open_time: DateTime<Utc>,
        close_time: DateTime<Utc>,
    ) -> Result<Market> {
        let market = Market::try_new(id, title, source, open_time, close_time)?;
        if !self.store.insert_market(&market).await? {
            return Err(ArenaError::MarketAlreadyExists {
                market_id: market.id().clone(),
            }
            .into());
        }
        info!(
            market_id = %market.id(),
            close_time = %market.close_time(),
            "Market created"
        );
        Ok(market)
    }

    /// Look up a market.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub async fn get(&self, id: &MarketId) -> Result<Option<Market>> {
        self.store.get_market(id).await
    }

    /// Markets still accepting predictions.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub async fn active(&self) -> Result<Vec<Market>> {
        let markets = self.store.list_markets().await?;
        Ok(markets.into_iter().filter(Market::is_active).collect())
    }
}

//! Builders for domain primitives used across tests.
//!
//! All timestamps are expressed as whole days after [`epoch`] so scenarios
//! read like "opens day 0, closes day 10, submitted day 1".

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::{Agent, AgentId, Market, MarketId, Prediction, Probability};

/// Fixed reference instant: 2025-01-01T00:00:00Z.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .single()
        .expect("valid epoch")
}

/// The instant `n` days after [`epoch`] (negative for before).
pub fn day(n: i64) -> DateTime<Utc> {
    epoch() + Duration::days(n)
}

/// Create a [`MarketId`] from a string.
pub fn market_id(id: &str) -> MarketId {
    MarketId::from(id)
}

/// Create an [`AgentId`] from a string.
pub fn agent_id(id: &str) -> AgentId {
    AgentId::from(id)
}

/// Create an active market open from day `open` to day `close`.
///
/// # Panics
///
/// Panics if `close <= open`.
pub fn market(id: &str, open: i64, close: i64) -> Market {
    Market::try_new(
        market_id(id),
        format!("Question {id}?"),
        format!("https://markets.example/{id}"),
        day(open),
        day(close),
    )
    .expect("valid market window")
}

/// Create a registered agent with a valid training source.
pub fn agent(id: &str, name: &str) -> Agent {
    Agent::try_new(
        agent_id(id),
        name,
        format!("https://models.example/{id}"),
        None,
    )
    .expect("valid agent")
}

/// Create an unscored prediction made on day `at`.
///
/// # Panics
///
/// Panics if `percent` is outside `0..=100`.
pub fn prediction(agent: &str, market: &str, percent: i64, at: i64) -> Prediction {
    Prediction::new(
        agent_id(agent),
        market_id(market),
        Probability::try_new(percent).expect("valid probability"),
        day(at),
    )
}

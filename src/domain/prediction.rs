//! Forecasts submitted by agents against markets.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{AgentId, MarketId};

/// Percent confidence that a market resolves true.
///
/// Always within `0..=100`. Construction and deserialization both go
/// through [`Probability::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Probability(u8);

impl Probability {
    /// Upper bound, inclusive.
    pub const MAX: u8 = 100;

    /// Create a probability from a whole percentage.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutOfRangeProbability`] outside `0..=100`.
    pub fn try_new(percent: impl Into<i64>) -> Result<Self, DomainError> {
        let value = percent.into();
        match u8::try_from(value) {
            Ok(p) if p <= Self::MAX => Ok(Self(p)),
            _ => Err(DomainError::OutOfRangeProbability { value }),
        }
    }

    /// The whole percentage.
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// The probability as a fraction in `[0, 1]`.
    #[must_use]
    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl TryFrom<i64> for Probability {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Probability> for i64 {
    fn from(p: Probability) -> Self {
        i64::from(p.0)
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// One agent's forecast for one market.
///
/// At most one prediction exists per `(agent_id, market_id)` pair. The
/// `scored` flag flips to true exactly once, when the market resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    agent_id: AgentId,
    market_id: MarketId,
    probability: Probability,
    submitted_at: DateTime<Utc>,
    scored: bool,
}

impl Prediction {
    /// Create a new, unscored prediction.
    #[must_use]
    pub const fn new(
        agent_id: AgentId,
        market_id: MarketId,
        probability: Probability,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            agent_id,
            market_id,
            probability,
            submitted_at,
            scored: false,
        }
    }

    /// The agent that submitted this prediction.
    #[must_use]
    pub const fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }

    /// The market this prediction targets.
    #[must_use]
    pub const fn market_id(&self) -> &MarketId {
        &self.market_id
    }

    /// Stated probability of the market resolving true.
    #[must_use]
    pub const fn probability(&self) -> Probability {
        self.probability
    }

    /// When the prediction was submitted.
    #[must_use]
    pub const fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// Returns true once the prediction has been scored.
    #[must_use]
    pub const fn is_scored(&self) -> bool {
        self.scored
    }

    /// Flag the prediction as scored. Idempotent.
    pub fn mark_scored(&mut self) {
        self.scored = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_accepts_bounds() {
        assert_eq!(Probability::try_new(0).unwrap().percent(), 0);
        assert_eq!(Probability::try_new(100).unwrap().percent(), 100);
        assert_eq!(Probability::try_new(80).unwrap().as_fraction(), 0.8);
    }

    #[test]
    fn probability_rejects_out_of_range() {
        assert_eq!(
            Probability::try_new(101),
            Err(DomainError::OutOfRangeProbability { value: 101 })
        );
        assert_eq!(
            Probability::try_new(-1),
            Err(DomainError::OutOfRangeProbability { value: -1 })
        );
    }

    #[test]
    fn probability_deserialization_is_validated() {
        let ok: Probability = serde_json::from_str("55").unwrap();
        assert_eq!(ok.percent(), 55);
        assert!(serde_json::from_str::<Probability>("250").is_err());
    }

    #[test]
    fn mark_scored_is_idempotent() {
        let mut prediction = Prediction::new(
            AgentId::from("a"),
            MarketId::from("m"),
            Probability::try_new(40).unwrap(),
            Utc::now(),
        );
        assert!(!prediction.is_scored());
        prediction.mark_scored();
        prediction.mark_scored();
        assert!(prediction.is_scored());
    }
}

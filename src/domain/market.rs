//! Market-related domain types.
//!
//! - [`Market`] - A binary-outcome market with an open/close window
//! - [`ResolutionRecord`] - Provenance attached to a market when it resolves

use std::result::Result;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::MarketId;

/// Where a resolved outcome came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionRecord {
    /// Link or name of the authority the outcome was taken from.
    pub source: String,
    /// Free-form note from whoever resolved the market.
    pub note: String,
}

impl ResolutionRecord {
    /// Create a new resolution record.
    pub fn new(source: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            note: note.into(),
        }
    }
}

/// A binary prediction market.
///
/// Markets are created active and unresolved. They transition to
/// resolved and inactive exactly once, through [`Market::mark_resolved`],
/// at which point the outcome becomes known.
///
/// # Example
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use predarena::domain::{id::MarketId, market::Market};
///
/// let open = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
/// let market = Market::try_new(
///     MarketId::from("fed-cut-march"),
///     "Will the Fed cut rates in March?",
///     "https://www.federalreserve.gov",
///     open,
///     open + Duration::days(10),
/// )
/// .unwrap();
///
/// assert!(market.is_active());
/// assert_eq!(market.outcome(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    id: MarketId,
    title: String,
    source: String,
    open_time: DateTime<Utc>,
    close_time: DateTime<Utc>,
    active: bool,
    resolved: bool,
    outcome: Option<bool>,
    resolution: Option<ResolutionRecord>,
}

impl Market {
    /// Create a new active, unresolved market with domain invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - `open_time` must be strictly before `close_time`
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidMarketWindow`] if the window is empty
    /// or inverted.
    pub fn try_new(
        id: MarketId,
        title: impl Into<String>,
        source: impl Into<String>,
        open_time: DateTime<Utc>,
        close_time: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let market = Self {
            id,
            title: title.into(),
            source: source.into(),
            open_time,
            close_time,
            active: true,
            resolved: false,
            outcome: None,
            resolution: None,
        };
        market.validate_window()?;
        Ok(market)
    }

    /// Get the market ID.
    #[must_use]
    pub const fn id(&self) -> &MarketId {
        &self.id
    }

    /// Get the market title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the reference link for the market question.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get the time the market opened for predictions.
    #[must_use]
    pub const fn open_time(&self) -> DateTime<Utc> {
        self.open_time
    }

    /// Get the time the market closes.
    #[must_use]
    pub const fn close_time(&self) -> DateTime<Utc> {
        self.close_time
    }

    /// Returns true while the market accepts predictions.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns true once the market has been resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// The resolved outcome, or `None` while unresolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<bool> {
        self.outcome
    }

    /// Resolution provenance, present once resolved.
    #[must_use]
    pub const fn resolution(&self) -> Option<&ResolutionRecord> {
        self.resolution.as_ref()
    }

    /// Length of the prediction window.
    #[must_use]
    pub fn window(&self) -> Duration {
        self.close_time - self.open_time
    }

    /// Check the `open_time < close_time` invariant.
    ///
    /// Records loaded from a store bypass [`Market::try_new`], so the
    /// resolver re-checks this before scoring.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidMarketWindow`] if the window is empty.
    pub fn validate_window(&self) -> Result<(), DomainError> {
        if self.close_time <= self.open_time {
            return Err(DomainError::InvalidMarketWindow {
                open_time: self.open_time,
                close_time: self.close_time,
            });
        }
        Ok(())
    }

    /// Transition the market to resolved and inactive.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MarketAlreadyResolved`] if called twice.
    pub fn mark_resolved(
        &mut self,
        outcome: bool,
        record: ResolutionRecord,
    ) -> Result<(), DomainError> {
        if self.resolved {
            return Err(DomainError::MarketAlreadyResolved {
                market_id: self.id.clone(),
            });
        }
        self.active = false;
        self.resolved = true;
        self.outcome = Some(outcome);
        self.resolution = Some(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn open() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    fn create_market() -> Market {
        Market::try_new(
            MarketId::from("market-1"),
            "Will it rain tomorrow?",
            "https://weather.example",
            open(),
            open() + Duration::days(10),
        )
        .unwrap()
    }

    #[test]
    fn new_market_is_active_and_unresolved() {
        let market = create_market();
        assert!(market.is_active());
        assert!(!market.is_resolved());
        assert_eq!(market.outcome(), None);
        assert!(market.resolution().is_none());
        assert_eq!(market.window(), Duration::days(10));
    }

    #[test]
    fn try_new_rejects_equal_open_and_close() {
        let result = Market::try_new(MarketId::from("m"), "t", "s", open(), open());
        assert!(matches!(
            result,
            Err(DomainError::InvalidMarketWindow { .. })
        ));
    }

    #[test]
    fn try_new_rejects_inverted_window() {
        let result = Market::try_new(
            MarketId::from("m"),
            "t",
            "s",
            open(),
            open() - Duration::hours(1),
        );
        assert!(result.is_err());
    }

    #[test]
    fn mark_resolved_flips_state_once() {
        let mut market = create_market();
        market
            .mark_resolved(true, ResolutionRecord::new("nws", "rained 3mm"))
            .unwrap();

        assert!(!market.is_active());
        assert!(market.is_resolved());
        assert_eq!(market.outcome(), Some(true));
        assert_eq!(market.resolution().map(|r| r.note.as_str()), Some("rained 3mm"));

        let second = market.mark_resolved(false, ResolutionRecord::new("x", "y"));
        assert!(matches!(
            second,
            Err(DomainError::MarketAlreadyResolved { .. })
        ));
        assert_eq!(market.outcome(), Some(true));
    }
}

//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by `try_new` constructors that validate inputs
//! and by the resolver when it refuses to score a batch.
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use predarena::domain::error::DomainError;
//! use predarena::domain::id::MarketId;
//! use predarena::domain::market::Market;
//!
//! let at = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
//!
//! // A market must close strictly after it opens
//! let result = Market::try_new(MarketId::new("m-1"), "Title", "https://example.com", at, at);
//!
//! assert!(matches!(result, Err(DomainError::InvalidMarketWindow { .. })));
//! ```

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::id::MarketId;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A market's close time must be strictly after its open time.
    #[error("market window is empty: close time {close_time} is not after open time {open_time}")]
    InvalidMarketWindow {
        /// Time the market opened.
        open_time: DateTime<Utc>,
        /// Time the market closes.
        close_time: DateTime<Utc>,
    },

    /// Probabilities are whole percentages between 0 and 100.
    #[error("probability must be between 0 and 100, got {value}")]
    OutOfRangeProbability {
        /// The rejected value.
        value: i64,
    },

    /// Agents must have a display name.
    #[error("agent name cannot be empty")]
    EmptyAgentName,

    /// The training source must be a web link.
    #[error("training source must be an http(s) link, got '{link}'")]
    InvalidTrainingSource {
        /// The rejected value.
        link: String,
    },

    /// A market resolves exactly once.
    #[error("market {market_id} has already been resolved")]
    MarketAlreadyResolved {
        /// The market that was resolved before.
        market_id: MarketId,
    },
}

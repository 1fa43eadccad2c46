//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`]: builders for markets, agents and predictions on a fixed
//!   day-based timeline.
//! - [`config`]: canonical scoring and decay parameters.
//! - [`store`]: pre-seeded [`MemoryStore`](crate::adapter::store::MemoryStore)
//!   fixtures.

pub mod config;
pub mod domain;
pub mod store;

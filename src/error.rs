use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::id::{AgentId, MarketId};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to install tracing subscriber: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Use-case failures raised by the application services.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArenaError {
    #[error("no market found with id {market_id}")]
    MarketNotFound { market_id: MarketId },

    #[error("a market with id {market_id} already exists")]
    MarketAlreadyExists { market_id: MarketId },

    #[error("market {market_id} is closed to new predictions")]
    MarketClosed { market_id: MarketId },

    #[error("market {market_id} has already been resolved")]
    AlreadyResolved { market_id: MarketId },

    #[error("agent {agent_id} is not registered")]
    AgentNotRegistered { agent_id: AgentId },

    #[error("agent {agent_id} is already registered")]
    AgentAlreadyRegistered { agent_id: AgentId },

    #[error("agent {agent_id} already submitted a prediction for market {market_id}")]
    DuplicatePrediction {
        agent_id: AgentId,
        market_id: MarketId,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Arena(#[from] ArenaError),

    #[error("store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, Error>;

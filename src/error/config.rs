//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// An environment variable or flag could not be parsed.
    #[error("invalid value '{value}' for {name}: {message}")]
    InvalidValue {
        name: String,
        value: String,
        message: String,
    },

    /// The name pool cannot supply a unique name for every item.
    #[error("deck of {requested} items needs at least {requested} names, pool has {pool}")]
    PoolTooSmall { requested: usize, pool: usize },

    /// A session needs at least one item.
    #[error("deck size must be at least 1")]
    EmptyDeck,
}

impl ConfigError {
    pub fn invalid(name: &str, value: &str, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID",
            ConfigError::PoolTooSmall { .. } => "CONFIG_POOL",
            ConfigError::EmptyDeck => "CONFIG_EMPTY_DECK",
        }
    }
}

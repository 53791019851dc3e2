use thiserror::Error;

/// A rejected topology configuration.
///
/// Each variant carries the offending field path(s) and value so an operator
/// can fix the configuration; `message` is the rendered catalog template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("{message}")]
    EnumViolation {
        field: String,
        value: String,
        allowed: String,
        message: String,
    },

    #[error("{message}")]
    MutuallyExclusive {
        first: String,
        second: String,
        message: String,
    },

    #[error("{message}")]
    InvalidParam {
        field: String,
        value: String,
        message: String,
    },
}

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Configuration error: {0}")]
    Topology(#[from] TopologyError),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),
}

impl CacheError {
    /// True for an ordinary cache miss, false for every failure.
    pub fn is_miss(&self) -> bool {
        matches!(self, CacheError::KeyNotFound(_))
    }
}

use super::{FusionError, MassError, RegistryError};

/// Top-level error for FaultFuse operations.
#[derive(Debug, thiserror::Error)]
pub enum FaultFuseError {
    #[error("invalid mass function: {0}")]
    InvalidMassFunction(#[from] MassError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Fusion(#[from] FusionError),

    #[error("expert {expert} failed: {reason}")]
    ExpertFailed { expert: String, reason: String },

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),

    #[error("history sink error: {0}")]
    SinkError(String),
}

impl FaultFuseError {
    /// Whether the error is recoverable registry misuse rather than a fault in
    /// evidence or infrastructure.
    pub fn is_registry_misuse(&self) -> bool {
        matches!(self, Self::Registry(_))
    }
}

impl From<serde_json::Error> for FaultFuseError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for FaultFuseError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}

/// Convenience alias used throughout the workspace.
pub type FaultFuseResult<T> = Result<T, FaultFuseError>;

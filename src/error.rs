//! Error types raised by the engine and its configuration layer.

use crate::entities::Direction;

/// Errors returned by engine commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A move would take the ship off the grid; its position is unchanged.
    #[error("Cannot move {direction}. Out of Bounds!")]
    BoundaryExceeded { direction: Direction },
}

/// Errors raised while loading a [`GameConfig`](crate::config::GameConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Parsed fine, but the values cannot describe a playable field.
    #[error("invalid config: {0}")]
    Invalid(String),
}

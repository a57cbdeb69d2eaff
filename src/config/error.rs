//! Configuration error types.

use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// The configuration document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// The command buffer must hold at least one command
    #[error("Command buffer must be at least 1, got {0}")]
    ZeroCommandBuffer(usize),

    /// Maximum delay must be a positive, finite number of milliseconds
    #[error("Maximum delay must be positive and finite, got {0}")]
    InvalidMaxDelay(f64),
}

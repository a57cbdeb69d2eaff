//! Configuration for the transition edge.
//!
//! Validation uses Stillwater's `Validation` so that every problem in a
//! configuration is reported at once rather than one per load attempt.
//!
//! # Example
//!
//! ```rust
//! use transition_viz::config::VizConfig;
//! use transition_viz::core::DelayParsing;
//!
//! let config = VizConfig::from_json(r#"{ "delay_parsing": "lenient" }"#).unwrap();
//! assert_eq!(config.delay_parsing, DelayParsing::Lenient);
//! assert_eq!(config.command_buffer, 64);
//! ```

pub mod error;

pub use error::ConfigError;

use crate::core::{Classifier, DelayParsing};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Default capacity of the simulation command channel
pub const DEFAULT_COMMAND_BUFFER: usize = 64;

fn default_command_buffer() -> usize {
    DEFAULT_COMMAND_BUFFER
}

/// Settings shared by every transition edge of one visualizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VizConfig {
    /// How delay expressions in `xstate.after(...)` identifiers are parsed
    #[serde(default)]
    pub delay_parsing: DelayParsing,

    /// Capacity of the channel carrying commands to the simulation service
    #[serde(default = "default_command_buffer")]
    pub command_buffer: usize,

    /// Delays above this many milliseconds are treated as malformed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_delay_ms: Option<f64>,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            delay_parsing: DelayParsing::default(),
            command_buffer: DEFAULT_COMMAND_BUFFER,
            max_delay_ms: None,
        }
    }
}

impl VizConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// Returns the first violation when validation fails; use
    /// [`VizConfig::validate`] to inspect all of them.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;

        match config.validate() {
            Validation::Success(_) => Ok(config),
            Validation::Failure(errors) => Err(errors.head().clone()),
        }
    }

    /// Validate all settings, accumulating every violation.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        checks.push(if self.command_buffer == 0 {
            Validation::fail(ConfigError::ZeroCommandBuffer(self.command_buffer))
        } else {
            Validation::success(())
        });

        if let Some(max) = self.max_delay_ms {
            checks.push(if max.is_finite() && max > 0.0 {
                Validation::success(())
            } else {
                Validation::fail(ConfigError::InvalidMaxDelay(max))
            });
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Classifier matching these settings.
    pub fn classifier(&self) -> Classifier {
        let classifier = Classifier::new(self.delay_parsing);
        match self.max_delay_ms {
            Some(max) => classifier.with_max_delay(max),
            None => classifier,
        }
    }
}

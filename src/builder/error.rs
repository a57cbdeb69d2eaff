//! Build errors for transition builders.

use thiserror::Error;

/// Errors that can occur when building transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Transition event type not specified. Call .event(type) or .always()")]
    MissingEventType,

    #[error("Transition source node not specified. Call .source(node)")]
    MissingSource,
}

//! Builder API for ergonomic transition construction.
//!
//! This module provides a fluent builder and shorthand constructors for
//! transition descriptors, mostly useful to hosts and tests that do not
//! receive descriptors from a graph model.

pub mod error;
pub mod transition;

pub use error::BuildError;
pub use transition::TransitionBuilder;

use crate::core::{
    EventType, NodeId, TransitionDescriptor, TransitionId, DELAYED_EVENT_PREFIX,
};

/// Create an unguarded transition without actions.
///
/// # Example
///
/// ```
/// use transition_viz::builder::event_transition;
///
/// let transition = event_transition("light.green", "TIMER");
/// assert_eq!(transition.event_type.as_str(), "TIMER");
/// ```
pub fn event_transition(
    source: impl Into<NodeId>,
    event_type: impl Into<EventType>,
) -> TransitionDescriptor {
    TransitionDescriptor {
        id: TransitionId::generate(),
        event_type: event_type.into(),
        source: source.into(),
        guard: None,
        actions: Vec::new(),
    }
}

/// Create a timer transition out of `source` firing after `delay_ms`.
///
/// The event type follows the `xstate.after(<delay>)#<source>` convention.
///
/// # Example
///
/// ```
/// use transition_viz::builder::delayed_transition;
/// use transition_viz::core::DelayedTransitionMetadata;
///
/// let transition = delayed_transition("light.yellow", 500);
/// assert_eq!(transition.event_type.as_str(), "xstate.after(500)#light.yellow");
/// assert_eq!(transition.event_type.classify().delay_ms(), Some(500.0));
/// ```
pub fn delayed_transition(source: impl Into<NodeId>, delay_ms: u64) -> TransitionDescriptor {
    let source = source.into();
    let event_type = EventType::new(format!("{DELAYED_EVENT_PREFIX}({delay_ms})#{source}"));
    event_transition(source, event_type)
}

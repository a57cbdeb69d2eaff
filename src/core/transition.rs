//! Static transition definitions and eligibility against a snapshot.
//!
//! Eligibility comes in two strengths:
//! - [`is_potential`] needs the event to be accepted AND the source node to be
//!   active. It drives visual emphasis.
//! - [`is_enabled`] only needs the event to be accepted (and the delay, if any,
//!   to be well formed). It gates the trigger control.
//!
//! A transition can therefore be enabled while not potential, when another
//! active node accepts the same event type.

use super::event::{DelayedTransitionMetadata, EventType};
use super::snapshot::{MachineSnapshot, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of a transition edge.
///
/// Layout collaborators key their registrations on this id, so it must not
/// change for the lifetime of the descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionId(String);

impl TransitionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Random v4 id for edges the graph model did not name.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to a named guard. Evaluation happens in the interpreter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardRef {
    pub name: String,
}

impl GuardRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Reference to an action by type name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRef {
    #[serde(rename = "type")]
    pub action_type: String,
}

impl ActionRef {
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
        }
    }
}

/// Static definition of one transition edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionDescriptor {
    pub id: TransitionId,
    pub event_type: EventType,
    pub source: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guard: Option<GuardRef>,
    #[serde(default)]
    pub actions: Vec<ActionRef>,
}

impl TransitionDescriptor {
    /// Could this transition fire against `snapshot`? (pure)
    pub fn is_potential(&self, snapshot: &MachineSnapshot) -> bool {
        is_potential(self, snapshot)
    }

    /// Should the trigger control accept activation? (pure)
    pub fn is_enabled(
        &self,
        snapshot: &MachineSnapshot,
        delay: &DelayedTransitionMetadata,
    ) -> bool {
        is_enabled(self, snapshot, delay)
    }

    pub fn guard_name(&self) -> Option<&str> {
        self.guard.as_ref().map(|g| g.name.as_str())
    }

    /// Action type names in declared order.
    pub fn action_types(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|a| a.action_type.as_str())
    }
}

/// True iff the event type is in `next_events` and the source node is in
/// the active configuration.
///
/// # Example
///
/// ```rust
/// use transition_viz::builder::TransitionBuilder;
/// use transition_viz::core::{is_potential, MachineSnapshot};
///
/// let transition = TransitionBuilder::new()
///     .event("TIMER")
///     .source("light.green")
///     .build()
///     .unwrap();
///
/// let green = MachineSnapshot::new(["light", "light.green"], ["TIMER"]);
/// let yellow = MachineSnapshot::new(["light", "light.yellow"], ["TIMER"]);
///
/// assert!(is_potential(&transition, &green));
/// assert!(!is_potential(&transition, &yellow));
/// ```
pub fn is_potential(transition: &TransitionDescriptor, snapshot: &MachineSnapshot) -> bool {
    snapshot.accepts(transition.event_type.as_str())
        && snapshot.is_active(transition.source.as_str())
}

/// True iff the event type is in `next_events` and the delay is not malformed.
///
/// Source-node activity is not consulted.
pub fn is_enabled(
    transition: &TransitionDescriptor,
    snapshot: &MachineSnapshot,
    delay: &DelayedTransitionMetadata,
) -> bool {
    !delay.is_invalid() && snapshot.accepts(transition.event_type.as_str())
}

//! Point-in-time view of a running machine.

use super::event::EventType;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

/// Identity of a node (state) in the visualized machine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Snapshot exposed by the simulation service.
///
/// Snapshots are owned by the external interpreter and replaced wholesale on
/// every step. This crate only reads them.
///
/// # Example
///
/// ```rust
/// use transition_viz::core::MachineSnapshot;
///
/// let snapshot = MachineSnapshot::new(["light", "light.green"], ["TIMER"]);
///
/// assert!(snapshot.is_active("light.green"));
/// assert!(snapshot.accepts("TIMER"));
/// assert!(!snapshot.accepts("PED_WAIT"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineSnapshot {
    /// Currently active nodes.
    pub configuration: HashSet<NodeId>,

    /// Event types the machine will accept right now.
    pub next_events: HashSet<EventType>,
}

impl MachineSnapshot {
    pub fn new<N, E>(
        configuration: impl IntoIterator<Item = N>,
        next_events: impl IntoIterator<Item = E>,
    ) -> Self
    where
        N: Into<NodeId>,
        E: Into<EventType>,
    {
        Self {
            configuration: configuration.into_iter().map(Into::into).collect(),
            next_events: next_events.into_iter().map(Into::into).collect(),
        }
    }

    /// Is `node` part of the active configuration?
    pub fn is_active(&self, node: &str) -> bool {
        self.configuration.contains(node)
    }

    /// Will the machine currently accept `event_type`?
    pub fn accepts(&self, event_type: &str) -> bool {
        self.next_events.contains(event_type)
    }
}

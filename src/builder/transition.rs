//! Builder for constructing transition descriptors.

use crate::builder::error::BuildError;
use crate::core::{ActionRef, EventType, GuardRef, NodeId, TransitionDescriptor, TransitionId};

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder {
    id: Option<TransitionId>,
    event_type: Option<EventType>,
    source: Option<NodeId>,
    guard: Option<GuardRef>,
    actions: Vec<ActionRef>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            id: None,
            event_type: None,
            source: None,
            guard: None,
            actions: Vec::new(),
        }
    }

    /// Set a stable id (optional, a random id is generated otherwise).
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(TransitionId::new(id));
        self
    }

    /// Set the event type (required).
    pub fn event(mut self, event_type: impl Into<EventType>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    /// Mark the transition as eventless.
    pub fn always(self) -> Self {
        self.event("")
    }

    /// Set the source node (required).
    pub fn source(mut self, node: impl Into<NodeId>) -> Self {
        self.source = Some(node.into());
        self
    }

    /// Name the guard (optional).
    pub fn guard(mut self, name: impl Into<String>) -> Self {
        self.guard = Some(GuardRef::new(name));
        self
    }

    /// Append an action (optional, order is kept).
    pub fn action(mut self, action_type: impl Into<String>) -> Self {
        self.actions.push(ActionRef::new(action_type));
        self
    }

    /// Append several actions.
    pub fn actions<I, A>(mut self, action_types: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.actions
            .extend(action_types.into_iter().map(ActionRef::new));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<TransitionDescriptor, BuildError> {
        let event_type = self.event_type.ok_or(BuildError::MissingEventType)?;
        let source = self.source.ok_or(BuildError::MissingSource)?;

        Ok(TransitionDescriptor {
            id: self.id.unwrap_or_else(TransitionId::generate),
            event_type,
            source,
            guard: self.guard,
            actions: self.actions,
        })
    }
}

impl Default for TransitionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

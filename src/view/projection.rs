//! Derived view model for one transition.

use crate::core::{
    is_enabled, is_potential, Classifier, DelayedTransitionMetadata, MachineSnapshot,
    TransitionDescriptor, TransitionId,
};
use serde::Serialize;

/// Everything the renderer needs for one transition against one snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionProjection {
    pub id: TransitionId,
    /// Visual emphasis: event accepted and source node active.
    pub potential: bool,
    /// Trigger control accepts activation.
    pub enabled: bool,
    /// Event type uses the delayed-event prefix, valid or not.
    pub delayed: bool,
    /// Delay for proportional styling, when well formed.
    pub delay_ms: Option<f64>,
    pub label: String,
    pub guard: Option<String>,
    pub actions: Vec<String>,
}

/// A transition paired with its classification.
///
/// Classification depends only on the event type, so it is computed once
/// here. Eligibility depends on the snapshot and is computed per call.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionView {
    transition: TransitionDescriptor,
    delay: DelayedTransitionMetadata,
}

impl TransitionView {
    pub fn new(transition: TransitionDescriptor, classifier: &Classifier) -> Self {
        let delay = classifier.classify(transition.event_type.as_str());
        Self { transition, delay }
    }

    pub fn transition(&self) -> &TransitionDescriptor {
        &self.transition
    }

    pub fn delay(&self) -> &DelayedTransitionMetadata {
        &self.delay
    }

    /// Project against the latest snapshot.
    ///
    /// Returns `None` while no snapshot is available; nothing is rendered then.
    pub fn project(&self, snapshot: Option<&MachineSnapshot>) -> Option<TransitionProjection> {
        let snapshot = snapshot?;
        let transition = &self.transition;

        Some(TransitionProjection {
            id: transition.id.clone(),
            potential: is_potential(transition, snapshot),
            enabled: is_enabled(transition, snapshot, &self.delay),
            delayed: self.delay.is_delayed(),
            delay_ms: self.delay.delay_ms(),
            label: transition.event_type.label(&self.delay),
            guard: transition.guard_name().map(str::to_string),
            actions: transition.action_types().map(str::to_string).collect(),
        })
    }
}

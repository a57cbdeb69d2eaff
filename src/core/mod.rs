//! Pure core of the transition edge.
//!
//! This module contains the decision logic behind a rendered transition:
//! - Event identifier classification (plain vs. delayed events)
//! - Delay formatting for labels
//! - Machine snapshots and transition descriptors
//! - Eligibility of a transition against a snapshot
//!
//! Everything here is synchronous and side-effect free. Dispatching
//! commands to the simulation lives in [`crate::effects`].

mod delay;
mod event;
mod snapshot;
mod transition;

pub use delay::format_delay;
pub use event::{
    classify, Classifier, DelayParsing, DelayedTransitionMetadata, EventType,
    DELAYED_EVENT_PREFIX,
};
pub use snapshot::{MachineSnapshot, NodeId};
pub use transition::{
    is_enabled, is_potential, ActionRef, GuardRef, TransitionDescriptor, TransitionId,
};

//! Transition Viz: the decision core behind one transition edge of a
//! visualized state machine.
//!
//! A rendered transition needs to know two things about itself: what kind of
//! event triggers it (plain or timer-scheduled, and whether the timer is
//! well formed), and whether it could fire against the live machine. Both are
//! pure functions in [`core`]. User intents on the edge (hover to preview,
//! click to send) are forwarded to an injected simulation service through
//! [`effects`].
//!
//! # Core Concepts
//!
//! - **Classification**: `xstate.after(<delay>)#<suffix>` identifiers become
//!   [`DelayedTransitionMetadata`]
//! - **Eligibility**: a transition is *potential* when its event is accepted
//!   and its source node is active; its trigger is *enabled* when the event
//!   is accepted
//! - **Commands**: preview, clear-preview and send, fire-and-forget
//!
//! # Example
//!
//! ```rust
//! use transition_viz::builder::TransitionBuilder;
//! use transition_viz::core::{Classifier, MachineSnapshot};
//! use transition_viz::view::TransitionView;
//!
//! let transition = TransitionBuilder::new()
//!     .id("light.green:0")
//!     .event("xstate.after(1000)#light.green")
//!     .source("light.green")
//!     .build()
//!     .unwrap();
//!
//! let view = TransitionView::new(transition, &Classifier::default());
//! let snapshot = MachineSnapshot::new(
//!     ["light", "light.green"],
//!     ["xstate.after(1000)#light.green"],
//! );
//!
//! let projection = view.project(Some(&snapshot)).unwrap();
//! assert!(projection.potential);
//! assert_eq!(projection.label, "after 1s");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod effects;
pub mod view;

// Re-export commonly used types
pub use config::VizConfig;
pub use self::core::{
    classify, is_potential, DelayedTransitionMetadata, EventType, MachineSnapshot,
    TransitionDescriptor,
};
pub use effects::{SimulationCommand, SimulationService, TransitionControl};
pub use view::{TransitionProjection, TransitionView};

//! Commands sent from a transition edge to the simulation service.
//!
//! This module is the imperative shell around [`crate::core`]. The edge
//! never owns simulation state: it forwards two user intents (preview and
//! send) as one-way messages and moves on.
//!
//! # Key Concepts
//!
//! - **Commands**: The wire messages understood by the simulation service
//! - **Service**: An injected handle that accepts commands without blocking
//! - **Control**: Maps pointer and click intents of one transition to commands

mod command;
mod control;
mod service;

pub use command::{SentEvent, SimulationCommand};
pub use control::TransitionControl;
pub use service::{ChannelSimulation, DispatchError, SimulationService};

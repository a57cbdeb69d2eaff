//! Handles to the simulation service.

use super::command::SimulationCommand;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Errors that can occur while handing a command to the simulation service
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Simulation command buffer is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("Simulation service is no longer receiving commands")]
    Closed,
}

/// Long-lived handle to the simulation service.
///
/// Passed explicitly to whatever needs it; there is no ambient instance.
/// `send` must not block: commands are fire-and-forget and no reply is read.
pub trait SimulationService: Send + Sync {
    fn send(&self, command: SimulationCommand) -> Result<(), DispatchError>;
}

impl<T: SimulationService + ?Sized> SimulationService for Arc<T> {
    fn send(&self, command: SimulationCommand) -> Result<(), DispatchError> {
        (**self).send(command)
    }
}

impl<T: SimulationService + ?Sized> SimulationService for &T {
    fn send(&self, command: SimulationCommand) -> Result<(), DispatchError> {
        (**self).send(command)
    }
}

/// Simulation handle backed by a bounded tokio channel.
///
/// The receiving half belongs to the simulation service. Sending uses
/// `try_send`, so a full buffer drops the command instead of waiting.
#[derive(Clone, Debug)]
pub struct ChannelSimulation {
    tx: mpsc::Sender<SimulationCommand>,
}

impl ChannelSimulation {
    /// Create a handle and the receiver the simulation service drains.
    ///
    /// A zero capacity is raised to one.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<SimulationCommand>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl SimulationService for ChannelSimulation {
    fn send(&self, command: SimulationCommand) -> Result<(), DispatchError> {
        self.tx.try_send(command).map_err(|e| match e {
            TrySendError::Full(_) => DispatchError::Full {
                capacity: self.tx.max_capacity(),
            },
            TrySendError::Closed(_) => DispatchError::Closed,
        })
    }
}

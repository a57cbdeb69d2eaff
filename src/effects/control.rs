//! User intents on a single transition edge.

use super::command::SimulationCommand;
use super::service::SimulationService;
use crate::core::TransitionDescriptor;

/// Trigger control for one transition.
///
/// Maps pointer-enter to a preview, pointer-leave to clearing the preview and
/// activation to sending the event. Dispatch is fire-and-forget: failures are
/// logged and dropped, and the control holds no state of its own.
///
/// # Example
///
/// ```rust
/// use transition_viz::builder::TransitionBuilder;
/// use transition_viz::effects::{ChannelSimulation, SimulationCommand, TransitionControl};
///
/// let transition = TransitionBuilder::new()
///     .event("TIMER")
///     .source("light.green")
///     .build()
///     .unwrap();
/// let (service, mut rx) = ChannelSimulation::channel(16);
///
/// let control = TransitionControl::new(&transition, &service);
/// control.pointer_enter();
/// control.activate();
///
/// assert_eq!(rx.try_recv().unwrap(), SimulationCommand::preview("TIMER".into()));
/// assert_eq!(rx.try_recv().unwrap(), SimulationCommand::send("TIMER".into()));
/// ```
pub struct TransitionControl<'a, S: SimulationService + ?Sized> {
    transition: &'a TransitionDescriptor,
    service: &'a S,
}

impl<'a, S: SimulationService + ?Sized> TransitionControl<'a, S> {
    pub fn new(transition: &'a TransitionDescriptor, service: &'a S) -> Self {
        Self {
            transition,
            service,
        }
    }

    pub fn transition(&self) -> &TransitionDescriptor {
        self.transition
    }

    /// Ask the service to preview this transition's event.
    pub fn pointer_enter(&self) {
        self.dispatch(SimulationCommand::preview(
            self.transition.event_type.clone(),
        ));
    }

    /// Cancel any preview.
    pub fn pointer_leave(&self) {
        self.dispatch(SimulationCommand::clear_preview());
    }

    /// Send this transition's event, with no payload.
    pub fn activate(&self) {
        self.dispatch(SimulationCommand::send(self.transition.event_type.clone()));
    }

    fn dispatch(&self, command: SimulationCommand) {
        let kind = command.kind();
        match self.service.send(command) {
            Ok(()) => {
                tracing::trace!("Dispatched {} for transition {}", kind, self.transition.id);
            }
            Err(e) => {
                tracing::warn!(
                    "Dropped {} for transition {}: {}",
                    kind,
                    self.transition.id,
                    e
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EventType, NodeId, TransitionId};
    use crate::effects::DispatchError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSimulation {
        sent: Mutex<Vec<SimulationCommand>>,
    }

    impl SimulationService for RecordingSimulation {
        fn send(&self, command: SimulationCommand) -> Result<(), DispatchError> {
            self.sent.lock().unwrap().push(command);
            Ok(())
        }
    }

    struct ClosedSimulation;

    impl SimulationService for ClosedSimulation {
        fn send(&self, _command: SimulationCommand) -> Result<(), DispatchError> {
            Err(DispatchError::Closed)
        }
    }

    fn transition() -> TransitionDescriptor {
        TransitionDescriptor {
            id: TransitionId::new("light.green:0"),
            event_type: EventType::new("TIMER"),
            source: NodeId::new("light.green"),
            guard: None,
            actions: Vec::new(),
        }
    }

    #[test]
    fn hover_sequence_previews_then_clears() {
        let service = RecordingSimulation::default();
        let t = transition();
        let control = TransitionControl::new(&t, &service);

        control.pointer_enter();
        control.pointer_leave();
        control.pointer_enter();

        assert_eq!(
            *service.sent.lock().unwrap(),
            vec![
                SimulationCommand::preview("TIMER".into()),
                SimulationCommand::clear_preview(),
                SimulationCommand::preview("TIMER".into()),
            ]
        );
    }

    #[test]
    fn activation_sends_event_type_only() {
        let service = RecordingSimulation::default();
        let t = transition();

        TransitionControl::new(&t, &service).activate();

        assert_eq!(
            *service.sent.lock().unwrap(),
            vec![SimulationCommand::send("TIMER".into())]
        );
    }

    #[test]
    fn dispatch_failures_do_not_propagate() {
        let t = transition();
        let control = TransitionControl::new(&t, &ClosedSimulation);

        control.pointer_enter();
        control.pointer_leave();
        control.activate();
    }

    #[test]
    fn works_with_trait_objects() {
        let service = RecordingSimulation::default();
        let dynamic: &dyn SimulationService = &service;
        let t = transition();

        TransitionControl::new(&t, dynamic).activate();

        assert_eq!(service.sent.lock().unwrap().len(), 1);
    }
}

//! Wire messages for the simulation service.

use crate::core::EventType;
use serde::{Deserialize, Serialize};

/// Event forwarded to the running machine.
///
/// Only the type is populated; structured event parameters are not collected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,
}

/// One-way message to the simulation service.
///
/// Serialized with a `type` discriminator matching the service protocol:
///
/// ```rust
/// use transition_viz::core::EventType;
/// use transition_viz::effects::SimulationCommand;
///
/// let preview = SimulationCommand::preview(EventType::new("TIMER"));
/// assert_eq!(
///     serde_json::to_string(&preview).unwrap(),
///     r#"{"type":"EVENT.PREVIEW","eventType":"TIMER"}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimulationCommand {
    /// Highlight what would happen if the event were sent.
    #[serde(rename = "EVENT.PREVIEW", rename_all = "camelCase")]
    EventPreview { event_type: EventType },

    /// Drop any preview. Last message wins.
    #[serde(rename = "PREVIEW.CLEAR")]
    PreviewClear,

    /// Send the event to the running machine.
    #[serde(rename = "SERVICE.SEND")]
    ServiceSend { event: SentEvent },
}

impl SimulationCommand {
    pub fn preview(event_type: EventType) -> Self {
        Self::EventPreview { event_type }
    }

    pub fn clear_preview() -> Self {
        Self::PreviewClear
    }

    pub fn send(event_type: EventType) -> Self {
        Self::ServiceSend {
            event: SentEvent { event_type },
        }
    }

    /// Protocol name of the command, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EventPreview { .. } => "EVENT.PREVIEW",
            Self::PreviewClear => "PREVIEW.CLEAR",
            Self::ServiceSend { .. } => "SERVICE.SEND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preview_wire_format() {
        let value = serde_json::to_value(SimulationCommand::preview("GO".into())).unwrap();
        assert_eq!(value, json!({ "type": "EVENT.PREVIEW", "eventType": "GO" }));
    }

    #[test]
    fn clear_wire_format_has_no_payload() {
        let value = serde_json::to_value(SimulationCommand::clear_preview()).unwrap();
        assert_eq!(value, json!({ "type": "PREVIEW.CLEAR" }));
    }

    #[test]
    fn send_wire_format_carries_only_the_type() {
        let value = serde_json::to_value(SimulationCommand::send("GO".into())).unwrap();
        assert_eq!(
            value,
            json!({ "type": "SERVICE.SEND", "event": { "type": "GO" } })
        );
    }

    #[test]
    fn commands_parse_from_service_json() {
        let command: SimulationCommand =
            serde_json::from_str(r#"{ "type": "SERVICE.SEND", "event": { "type": "STOP" } }"#)
                .unwrap();
        assert_eq!(command, SimulationCommand::send("STOP".into()));
        assert_eq!(command.kind(), "SERVICE.SEND");
    }
}

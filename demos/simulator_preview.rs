//! Drives a traffic light transition through a toy simulation service.
//!
//! The "service" task drains commands from the channel and publishes a new
//! snapshot whenever an event is sent, the way an interpreter would.

use transition_viz::builder::{delayed_transition, TransitionBuilder};
use transition_viz::config::VizConfig;
use transition_viz::core::MachineSnapshot;
use transition_viz::effects::{ChannelSimulation, SimulationCommand, TransitionControl};
use transition_viz::view::{SnapshotFeed, TransitionView};

fn light_snapshot(active: &str) -> MachineSnapshot {
    let timer = format!("xstate.after(1000)#light.{active}");
    MachineSnapshot::new(
        ["light".to_string(), format!("light.{active}")],
        ["PED_WAIT".to_string(), timer],
    )
}

#[tokio::main]
async fn main() {
    let config = VizConfig::from_json(r#"{ "command_buffer": 16 }"#).expect("valid config");
    let classifier = config.classifier();

    let (service, mut commands) = ChannelSimulation::channel(config.command_buffer);
    let feed = SnapshotFeed::new();
    let subscription = feed.subscribe();
    feed.publish(light_snapshot("green"));

    let timer = TransitionView::new(delayed_transition("light.green", 1000), &classifier);
    let ped_wait = TransitionView::new(
        TransitionBuilder::new()
            .id("light.green:PED_WAIT")
            .event("PED_WAIT")
            .source("light.green")
            .guard("crosswalkEnabled")
            .action("logRequest")
            .build()
            .expect("valid transition"),
        &classifier,
    );

    let simulation = tokio::spawn(async move {
        while let Some(command) = commands.recv().await {
            println!("service <- {}", serde_json::to_string(&command).unwrap_or_default());
            if let SimulationCommand::ServiceSend { .. } = command {
                feed.publish(light_snapshot("yellow"));
            }
        }
    });

    for view in [&timer, &ped_wait] {
        if let Some(projection) = subscription.project(view) {
            println!(
                "{} [{}] potential={} enabled={}",
                projection.id, projection.label, projection.potential, projection.enabled
            );
        }
    }

    let control = TransitionControl::new(timer.transition(), &service);
    control.pointer_enter();
    control.pointer_leave();
    control.activate();
    drop(service);

    simulation.await.expect("simulation task");

    if let Some(projection) = subscription.project(&timer) {
        println!(
            "after send: {} potential={} enabled={}",
            projection.label, projection.potential, projection.enabled
        );
    }
}

//! Host event loop

use tokio::sync::{mpsc::UnboundedReceiver, watch};
use tracing::{debug, info};

use crate::{
    presentation::TickHandle,
    state::{Button, EventHandler, TimerSnapshot},
};

/// Events the host delivers to the timer, one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Button(Button),
    Tick(TickHandle),
}

/// Deliver events to `handler` serially until every sender is gone
///
/// A fresh snapshot is published on `snapshots` after each event.
pub async fn run_event_loop<H: EventHandler>(
    handler: &mut H,
    mut events: UnboundedReceiver<HostEvent>,
    snapshots: watch::Sender<TimerSnapshot>,
) {
    info!("Starting event loop");
    snapshots.send_replace(handler.snapshot());

    while let Some(event) = events.recv().await {
        match event {
            HostEvent::Button(button) => {
                info!("Button pressed: {}", button);
                handler.on_button(button);
            }
            HostEvent::Tick(handle) => {
                debug!("Tick expired: {:?}", handle);
                handler.on_tick(handle);
            }
        }

        snapshots.send_replace(handler.snapshot());
    }

    info!("Event loop stopped");
}

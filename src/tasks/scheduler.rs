//! Tokio-backed single-shot tick scheduler

use std::time::Duration;

use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle, time::sleep};
use tracing::debug;

use super::HostEvent;
use crate::presentation::{TickHandle, TickScheduler};

/// Schedules each tick as a task that sleeps and then posts
/// [`HostEvent::Tick`] back to the event loop
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct TokioTickScheduler {
    events: UnboundedSender<HostEvent>,
    next_id: u64,
    pending: Option<(TickHandle, JoinHandle<()>)>,
}

impl TokioTickScheduler {
    /// Create a scheduler posting expired ticks to `events`
    pub fn new(events: UnboundedSender<HostEvent>) -> Self {
        Self {
            events,
            next_id: 0,
            pending: None,
        }
    }

    /// Whether a scheduled tick task has not finished yet
    #[cfg(test)]
    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|(_, task)| !task.is_finished())
            .unwrap_or(false)
    }
}

impl TickScheduler for TokioTickScheduler {
    fn schedule_tick(&mut self, after: Duration) -> TickHandle {
        if let Some((previous, task)) = self.pending.take() {
            // Expired ticks are replaced here; live ones were cancelled already
            debug!("Releasing tick task {:?}", previous);
            task.abort();
        }

        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        let events = self.events.clone();

        let task = tokio::spawn(async move {
            sleep(after).await;
            if events.send(HostEvent::Tick(handle)).is_err() {
                debug!("Event loop gone, dropping tick {:?}", handle);
            }
        });

        self.pending = Some((handle, task));
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        match self.pending.take() {
            Some((pending, task)) if pending == handle => task.abort(),
            other => self.pending = other,
        }
    }
}

impl Drop for TokioTickScheduler {
    fn drop(&mut self) {
        if let Some((_, task)) = self.pending.take() {
            task.abort();
        }
    }
}

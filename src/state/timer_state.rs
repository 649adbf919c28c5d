//! Read-only snapshot of the timer for status output

use serde::Serialize;

use super::Mode;

/// Point-in-time view of the mode timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerSnapshot {
    pub mode: Mode,
    pub label: &'static str,
    pub remaining_seconds: i64,
    pub sport_length: u32,
    pub pause_length: u32,
    pub tick_armed: bool,
}

impl TimerSnapshot {
    /// Snapshot of a freshly started timer
    pub fn idle(sport_length: u32, pause_length: u32) -> Self {
        Self {
            mode: Mode::Idle,
            label: Mode::Idle.label(),
            remaining_seconds: 0,
            sport_length,
            pause_length,
            tick_armed: false,
        }
    }

    /// Check if a countdown is running
    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.tick_armed
    }
}

//! Button events and how they map onto timer actions

use std::{fmt, str::FromStr};

use super::TimerSnapshot;
use crate::presentation::TickHandle;

/// The three physical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Select,
    Up,
    Down,
}

impl FromStr for Button {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "select" | "s" => Ok(Button::Select),
            "up" | "u" => Ok(Button::Up),
            "down" | "d" => Ok(Button::Down),
            other => Err(format!("Unknown button: {}", other)),
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Button::Select => "select",
            Button::Up => "up",
            Button::Down => "down",
        };
        f.write_str(name)
    }
}

/// Timer operation a button press triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Advance,
    Restart,
    ToggleSportLength,
    ExtendPause,
}

/// Button routing, one per app revision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonLayout {
    /// Down toggles the exercise length
    #[default]
    Current,
    /// Down extends the running pause
    Classic,
}

impl ButtonLayout {
    /// Action bound to `button` in this layout
    pub fn action_for(self, button: Button) -> Action {
        match (self, button) {
            (_, Button::Select) => Action::Advance,
            (_, Button::Up) => Action::Restart,
            (ButtonLayout::Current, Button::Down) => Action::ToggleSportLength,
            (ButtonLayout::Classic, Button::Down) => Action::ExtendPause,
        }
    }
}

/// Receiver for the events the host loop delivers, one method per event
pub trait EventHandler {
    /// A button was pressed
    fn on_button(&mut self, button: Button);

    /// The tick identified by `handle` expired
    fn on_tick(&mut self, handle: TickHandle);

    /// Read-only view of the current state
    fn snapshot(&self) -> TimerSnapshot;
}

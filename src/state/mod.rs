//! State management module
//!
//! This module contains the exercise cycle state machine and the types it is
//! configured and observed through.

pub mod buttons;
pub mod durations;
pub mod mode;
pub mod mode_timer;
pub mod timer_state;

// Re-export main types
pub use buttons::{Action, Button, ButtonLayout, EventHandler};
pub use durations::{Durations, PausePolicy, SportLength};
pub use mode::Mode;
pub use mode_timer::ModeTimer;
pub use timer_state::TimerSnapshot;

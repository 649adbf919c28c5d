//! kelko Sport - An interval timer for exercise sets
//!
//! The timer cycles through prepare, exercise ("Go!") and pause phases with a
//! countdown display and haptic cues near each phase boundary. The state
//! machine lives in [`state`] and only talks to the outside world through the
//! traits in [`presentation`]; [`tasks`] provides a tokio host for running it
//! in a terminal.

pub mod config;
pub mod presentation;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use presentation::{ConsolePresenter, Presenter, TickHandle, TickScheduler};
pub use state::{Durations, Mode, ModeTimer, TimerSnapshot};
pub use utils::signals::shutdown_signal;

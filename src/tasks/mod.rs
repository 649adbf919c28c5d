//! Host tasks module
//!
//! This module contains the tokio side of the app: the event loop that owns
//! the timer, the tick scheduler feeding it and the button input reader.

pub mod button_input;
pub mod event_loop;
pub mod scheduler;

// Re-export main types and functions
pub use button_input::{read_buttons, spawn_line_reader, Command};
pub use event_loop::{run_event_loop, HostEvent};
pub use scheduler::TokioTickScheduler;

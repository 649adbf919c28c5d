//! Process-level helpers
//!
//! Signal handling used by the binary to stop the host loop cleanly.

pub mod signals;

pub use signals::shutdown_signal;

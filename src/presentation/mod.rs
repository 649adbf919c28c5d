//! Presentation interface
//!
//! The mode timer never touches a screen, a vibration motor or a clock
//! directly. It talks to a [`Presenter`] for display and haptic output and
//! to a [`TickScheduler`] for its one-second countdown ticks.

pub mod console;

use std::time::Duration;

use serde::Serialize;

pub use console::{ConsolePresenter, OutputFormat};

/// Identity of one scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TickHandle(pub u64);

/// Haptic feedback patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticCue {
    Short,
    Double,
    Long,
}

/// Display and haptic output
pub trait Presenter {
    /// Update the mode caption
    fn set_mode_label(&mut self, text: &str);

    /// Render the remaining seconds of the running countdown
    fn set_countdown_display(&mut self, seconds: i64);

    /// Render the configured exercise length
    fn set_sport_length_display(&mut self, seconds: u32);

    fn pulse_short(&mut self);

    fn pulse_double(&mut self);

    fn pulse_long(&mut self);
}

/// Single-shot timer primitive provided by the host event loop
///
/// When a scheduled tick expires the host hands its handle back to the
/// timer's `handle_tick`. Nothing repeats on its own: each tick has to be
/// scheduled explicitly.
pub trait TickScheduler {
    /// Schedule one tick after `after` and return its handle
    fn schedule_tick(&mut self, after: Duration) -> TickHandle;

    /// Cancel a pending tick; cancelling an expired handle does nothing
    fn cancel_tick(&mut self, handle: TickHandle);
}

/// Zero-pad `seconds` to `width` digits, clamping negatives to zero
pub fn format_countdown(seconds: i64, width: usize) -> String {
    format!("{:0width$}", seconds.max(0), width = width)
}

/// Render an exercise length as "NN sec."
pub fn format_sport_length(seconds: u32) -> String {
    format!("{:02} sec.", seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_countdown_three_digits() {
        assert_eq!(format_countdown(45, 3), "045");
        assert_eq!(format_countdown(5, 3), "005");
        assert_eq!(format_countdown(120, 3), "120");
    }

    #[test]
    fn test_format_countdown_two_digits() {
        assert_eq!(format_countdown(3, 2), "03");
        assert_eq!(format_countdown(90, 2), "90");
    }

    #[test]
    fn test_format_countdown_clamps_negative() {
        assert_eq!(format_countdown(-1, 3), "000");
    }

    #[test]
    fn test_format_sport_length() {
        assert_eq!(format_sport_length(45), "45 sec.");
        assert_eq!(format_sport_length(30), "30 sec.");
        assert_eq!(format_sport_length(5), "05 sec.");
    }
}

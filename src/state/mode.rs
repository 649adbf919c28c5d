//! Exercise cycle modes

use serde::Serialize;

/// The four phases of the exercise cycle, in cycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    Idle,
    Prepare,
    Sport,
    Pause,
}

impl Mode {
    /// Number of modes in the cycle
    pub const COUNT: usize = 4;

    /// Position of this mode in the cycle
    pub fn index(self) -> usize {
        match self {
            Mode::Idle => 0,
            Mode::Prepare => 1,
            Mode::Sport => 2,
            Mode::Pause => 3,
        }
    }

    /// Mode at the given cycle position, wrapping modulo the cycle length
    pub fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => Mode::Idle,
            1 => Mode::Prepare,
            2 => Mode::Sport,
            _ => Mode::Pause,
        }
    }

    /// Mode entered automatically when this mode's countdown expires
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Caption shown on the mode label
    pub fn label(self) -> &'static str {
        match self {
            Mode::Idle => "Idle",
            Mode::Prepare => "Prepare",
            Mode::Sport => "Go!",
            Mode::Pause => "Pause",
        }
    }

    /// Whether a countdown runs in this mode
    pub fn is_counting(self) -> bool {
        !matches!(self, Mode::Idle)
    }
}

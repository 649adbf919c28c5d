//! Phase durations and the pause-length policy

use serde::Serialize;

/// How the pause phase length is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "policy", content = "seconds")]
pub enum PausePolicy {
    /// A constant pause length in seconds
    Fixed(u32),
    /// Twice the current exercise length
    DoubleSport,
}

impl PausePolicy {
    /// Pause length for the given exercise length
    pub fn pause_length(self, sport_length: u32) -> u32 {
        match self {
            PausePolicy::Fixed(seconds) => seconds,
            PausePolicy::DoubleSport => sport_length.saturating_mul(2),
        }
    }
}

/// Exercise length that flips between two configured values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SportLength {
    choices: [u32; 2],
    selected: usize,
}

impl SportLength {
    /// Create a toggle over `short` and `long`, starting at `long`
    pub fn new(short: u32, long: u32) -> Self {
        Self {
            choices: [short, long],
            selected: 1,
        }
    }

    /// Currently selected length in seconds
    pub fn seconds(&self) -> u32 {
        self.choices[self.selected]
    }

    /// Switch to the other configured value and return it
    pub fn toggle(&mut self) -> u32 {
        self.selected = 1 - self.selected;
        self.seconds()
    }

    /// Both configured values, short first
    pub fn choices(&self) -> [u32; 2] {
        self.choices
    }
}

/// Timing configuration for the exercise cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    /// Prepare countdown in seconds
    pub prepare_length: u32,
    /// Exercise length toggle
    pub sport_length: SportLength,
    /// Pause length policy
    pub pause_policy: PausePolicy,
}

impl Durations {
    /// Latest revision: 5s prepare, 30/45s exercise, pause twice the exercise
    pub fn new() -> Self {
        Self {
            prepare_length: 5,
            sport_length: SportLength::new(30, 45),
            pause_policy: PausePolicy::DoubleSport,
        }
    }

    /// Earliest revision: fixed 90s pause
    pub fn classic() -> Self {
        Self {
            pause_policy: PausePolicy::Fixed(90),
            ..Self::new()
        }
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self::new()
    }
}

//! Configuration and CLI argument handling

use std::time::Duration;

use anyhow::bail;
use clap::{Parser, ValueEnum};

use crate::{
    presentation::OutputFormat,
    state::{ButtonLayout, Durations, PausePolicy, SportLength},
};

/// Pause length policy as chosen on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PausePolicyArg {
    /// Use --pause-length
    Fixed,
    /// Twice the current exercise length
    DoubleSport,
}

/// Button layout as chosen on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// Down toggles the exercise length
    Current,
    /// Down extends the running pause
    Classic,
}

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "kelko-sport")]
#[command(about = "Interval timer cycling through prepare, exercise and pause phases")]
#[command(version = "3.0.0")]
pub struct Config {
    /// Prepare countdown in seconds
    #[arg(long, default_value = "5")]
    pub prepare: u32,

    /// Shorter exercise length in seconds
    #[arg(long, default_value = "30")]
    pub sport_short: u32,

    /// Longer exercise length in seconds, used at startup
    #[arg(long, default_value = "45")]
    pub sport_long: u32,

    /// How the pause length is derived
    #[arg(long, value_enum, default_value = "double-sport")]
    pub pause_policy: PausePolicyArg,

    /// Pause length in seconds for the fixed policy
    #[arg(long, default_value = "90")]
    pub pause_length: u32,

    /// Button layout
    #[arg(long, value_enum, default_value = "current")]
    pub layout: LayoutArg,

    /// Digits the countdown is zero-padded to
    #[arg(long, default_value = "3")]
    pub countdown_width: usize,

    /// Tick interval in milliseconds
    #[arg(long, default_value = "1000")]
    pub tick_ms: u64,

    /// Display output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Validate the timing options and build the cycle durations
    pub fn durations(&self) -> anyhow::Result<Durations> {
        if self.prepare == 0 {
            bail!("--prepare must be at least one second");
        }
        if self.sport_short == 0 || self.sport_long == 0 {
            bail!("Exercise lengths must be at least one second");
        }
        if self.sport_short == self.sport_long {
            bail!(
                "--sport-short and --sport-long must differ (both {}s)",
                self.sport_short
            );
        }

        let pause_policy = match self.pause_policy {
            PausePolicyArg::Fixed if self.pause_length == 0 => {
                bail!("--pause-length must be at least one second")
            }
            PausePolicyArg::Fixed => PausePolicy::Fixed(self.pause_length),
            PausePolicyArg::DoubleSport => PausePolicy::DoubleSport,
        };

        Ok(Durations {
            prepare_length: self.prepare,
            sport_length: SportLength::new(self.sport_short, self.sport_long),
            pause_policy,
        })
    }

    /// Validated tick interval
    pub fn tick_interval(&self) -> anyhow::Result<Duration> {
        if self.tick_ms == 0 {
            bail!("--tick-ms must be positive");
        }
        Ok(Duration::from_millis(self.tick_ms))
    }

    /// Validated countdown width
    pub fn countdown_width(&self) -> anyhow::Result<usize> {
        if !(1..=6).contains(&self.countdown_width) {
            bail!(
                "--countdown-width must be between 1 and 6, got {}",
                self.countdown_width
            );
        }
        Ok(self.countdown_width)
    }

    pub fn layout(&self) -> ButtonLayout {
        match self.layout {
            LayoutArg::Current => ButtonLayout::Current,
            LayoutArg::Classic => ButtonLayout::Classic,
        }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

//! Terminal rendering of the watch face

use std::io::Write;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, warn};

use super::{format_countdown, format_sport_length, HapticCue, Presenter};

/// How the console presenter renders updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One redrawn status line per update
    #[default]
    Text,
    /// One JSON object per update
    Json,
}

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum DisplayEvent<'a> {
    ModeLabel { text: &'a str },
    Countdown { seconds: i64, text: &'a str },
    SportLength { seconds: u32, text: &'a str },
    Haptic { cue: HapticCue },
}

#[derive(Debug, Serialize)]
struct DisplayRecord<'a> {
    timestamp: DateTime<Utc>,
    #[serde(flatten)]
    event: DisplayEvent<'a>,
}

/// Presenter that writes the watch face to a terminal or any other writer
#[derive(Debug)]
pub struct ConsolePresenter<W: Write> {
    out: W,
    format: OutputFormat,
    countdown_width: usize,
    mode_label: String,
    countdown: String,
    sport_length: String,
}

impl<W: Write> ConsolePresenter<W> {
    /// Create a presenter writing to `out`
    pub fn new(out: W, format: OutputFormat, countdown_width: usize) -> Self {
        Self {
            out,
            format,
            countdown_width,
            mode_label: "---".to_string(),
            countdown: "---".to_string(),
            sport_length: String::new(),
        }
    }

    /// Consume the presenter and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, event: DisplayEvent<'_>) {
        let result = match self.format {
            OutputFormat::Text => self.render_text(&event),
            OutputFormat::Json => {
                let record = DisplayRecord {
                    timestamp: Utc::now(),
                    event,
                };
                serde_json::to_writer(&mut self.out, &record)
                    .map_err(std::io::Error::from)
                    .and_then(|_| writeln!(self.out))
            }
        };

        if let Err(e) = result.and_then(|_| self.out.flush()) {
            warn!("Failed to write display update: {}", e);
        }
    }

    fn render_text(&mut self, event: &DisplayEvent<'_>) -> std::io::Result<()> {
        match event {
            DisplayEvent::Haptic { cue } => {
                let pattern = match cue {
                    HapticCue::Short => "~",
                    HapticCue::Double => "~ ~",
                    HapticCue::Long => "~~~~~~",
                };
                writeln!(self.out, "  {} bzz", pattern)
            }
            _ => writeln!(
                self.out,
                "{:<8} {:>6}   {}",
                self.mode_label, self.countdown, self.sport_length
            ),
        }
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn set_mode_label(&mut self, text: &str) {
        self.mode_label = text.to_string();
        // The countdown redraw that always follows a label change prints the line
        if self.format == OutputFormat::Json {
            self.render(DisplayEvent::ModeLabel { text });
        }
    }

    fn set_countdown_display(&mut self, seconds: i64) {
        let text = format_countdown(seconds, self.countdown_width);
        self.countdown = text.clone();
        self.render(DisplayEvent::Countdown {
            seconds,
            text: &text,
        });
    }

    fn set_sport_length_display(&mut self, seconds: u32) {
        let text = format_sport_length(seconds);
        self.sport_length = text.clone();
        self.render(DisplayEvent::SportLength {
            seconds,
            text: &text,
        });
    }

    fn pulse_short(&mut self) {
        debug!("Haptic cue: short pulse");
        self.render(DisplayEvent::Haptic {
            cue: HapticCue::Short,
        });
    }

    fn pulse_double(&mut self) {
        debug!("Haptic cue: double pulse");
        self.render(DisplayEvent::Haptic {
            cue: HapticCue::Double,
        });
    }

    fn pulse_long(&mut self) {
        debug!("Haptic cue: long pulse");
        self.render(DisplayEvent::Haptic {
            cue: HapticCue::Long,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(presenter: ConsolePresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_text_output_draws_status_line() {
        let mut presenter = ConsolePresenter::new(Vec::new(), OutputFormat::Text, 3);
        presenter.set_sport_length_display(45);
        presenter.set_mode_label("Prepare");
        presenter.set_countdown_display(5);

        let out = output(presenter);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("Prepare"));
        assert!(lines[1].contains("005"));
        assert!(lines[1].contains("45 sec."));
    }

    #[test]
    fn test_text_output_haptics() {
        let mut presenter = ConsolePresenter::new(Vec::new(), OutputFormat::Text, 3);
        presenter.pulse_short();
        presenter.pulse_double();
        presenter.pulse_long();

        let out = output(presenter);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["  ~ bzz", "  ~ ~ bzz", "  ~~~~~~ bzz"]);
    }

    #[test]
    fn test_json_output_one_record_per_update() {
        let mut presenter = ConsolePresenter::new(Vec::new(), OutputFormat::Json, 2);
        presenter.set_mode_label("Go!");
        presenter.set_countdown_display(3);
        presenter.pulse_long();

        let out = output(presenter);
        let records: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["event"], "mode_label");
        assert_eq!(records[0]["text"], "Go!");
        assert_eq!(records[1]["event"], "countdown");
        assert_eq!(records[1]["seconds"], 3);
        assert_eq!(records[1]["text"], "03");
        assert_eq!(records[2]["event"], "haptic");
        assert_eq!(records[2]["cue"], "long");
        assert!(records[2]["timestamp"].is_string());
    }
}

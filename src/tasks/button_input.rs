//! Button input read from text commands

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
    thread,
};

use anyhow::Context;
use tokio::sync::{
    mpsc::{self, UnboundedReceiver, UnboundedSender},
    watch,
};
use tracing::{debug, info, warn};

use super::HostEvent;
use crate::state::{Button, TimerSnapshot};

/// One line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Press(Button),
    Status,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "status" => Ok(Command::Status),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => other.parse().map(Command::Press),
        }
    }
}

/// Read lines from `reader` on a dedicated thread
///
/// The thread is detached so a read blocked on a terminal never holds up
/// runtime shutdown. It stops at end of input, on the first read error, or
/// once the receiver is dropped and the next line arrives.
pub fn spawn_line_reader<R>(reader: R) -> anyhow::Result<UnboundedReceiver<io::Result<String>>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();

    thread::Builder::new()
        .name("line-reader".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.send(line).is_err() || failed {
                    break;
                }
            }
            debug!("Line reader finished");
        })
        .context("Failed to spawn input thread")?;

    Ok(rx)
}

/// Handle command lines until end of input or `quit`
///
/// Button presses are forwarded to the event loop; `status` writes the
/// latest snapshot as JSON to `status_out`.
pub async fn read_buttons<W: Write>(
    mut lines: UnboundedReceiver<io::Result<String>>,
    events: UnboundedSender<HostEvent>,
    snapshots: watch::Receiver<TimerSnapshot>,
    mut status_out: W,
) -> anyhow::Result<()> {
    while let Some(line) = lines.recv().await {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Press(button)) => {
                events
                    .send(HostEvent::Button(button))
                    .context("Event loop is not running")?;
            }
            Ok(Command::Status) => {
                let snapshot = *snapshots.borrow();
                serde_json::to_writer(&mut status_out, &snapshot)?;
                writeln!(status_out)?;
                status_out.flush()?;
            }
            Ok(Command::Quit) => {
                info!("Quit requested");
                return Ok(());
            }
            Err(e) => warn!("Ignoring input: {}", e),
        }
    }

    info!("Input closed");
    Ok(())
}

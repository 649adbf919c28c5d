//! kelko Sport - An interval timer for exercise sets
//!
//! This is the terminal entry point: buttons are typed on stdin, the watch
//! face is drawn on stdout and logs go to stderr.

use tokio::sync::{mpsc, watch};
use tracing::info;

use kelko_sport::{
    config::Config,
    presentation::ConsolePresenter,
    state::ModeTimer,
    tasks::{read_buttons, run_event_loop, spawn_line_reader, TokioTickScheduler},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(format!("kelko_sport={}", config.log_level()))
        .init();

    let durations = config.durations()?;
    let tick_interval = config.tick_interval()?;
    let countdown_width = config.countdown_width()?;

    info!("Starting kelko-sport v3.0.0");
    info!(
        "Configuration: prepare={}s, sport={:?}s, pause={:?}, layout={:?}, tick={}ms",
        durations.prepare_length,
        durations.sport_length.choices(),
        durations.pause_policy,
        config.layout(),
        config.tick_ms
    );
    info!("Buttons: select (s), up (u), down (d); also status, quit");

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let presenter = ConsolePresenter::new(std::io::stdout(), config.output, countdown_width);
    let scheduler = TokioTickScheduler::new(event_tx.clone());

    let mut timer = ModeTimer::new(durations, config.layout(), presenter, scheduler)
        .with_tick_interval(tick_interval);
    timer.start();

    let (snapshot_tx, snapshot_rx) = watch::channel(timer.snapshot());
    let lines = spawn_line_reader(std::io::BufReader::new(std::io::stdin()))?;

    tokio::select! {
        _ = run_event_loop(&mut timer, event_rx, snapshot_tx) => {}
        result = read_buttons(lines, event_tx, snapshot_rx, std::io::stdout()) => {
            result?;
        }
        result = shutdown_signal() => {
            result?;
            info!("Shutdown signal received");
        }
    }

    info!("Stopped in {:?}", timer.mode());
    Ok(())
}

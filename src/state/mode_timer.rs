//! The mode timer: current mode, countdown and tick driver

use std::time::Duration;

use tracing::{debug, info, warn};

use super::{Action, Button, ButtonLayout, Durations, EventHandler, Mode, TimerSnapshot};
use crate::presentation::{Presenter, TickHandle, TickScheduler};

/// Remaining seconds at which the double pulse fires
const DOUBLE_PULSE_AT: i64 = 15;
/// Remaining seconds at which the short pulse fires
const SHORT_PULSE_AT: i64 = 5;
/// Below this every tick redraws; above it only multiples of it do
const REDRAW_EVERY: i64 = 5;

/// Owns the exercise cycle state and drives it from button presses and ticks
///
/// All output goes through the injected [`Presenter`], and all scheduling
/// through the injected [`TickScheduler`]. At most one tick is pending at
/// any time.
#[derive(Debug)]
pub struct ModeTimer<P, S> {
    mode: Mode,
    remaining_seconds: i64,
    durations: Durations,
    layout: ButtonLayout,
    tick_interval: Duration,
    pending_tick: Option<TickHandle>,
    presenter: P,
    scheduler: S,
}

impl<P: Presenter, S: TickScheduler> ModeTimer<P, S> {
    /// Create an idle timer with one-second ticks
    pub fn new(durations: Durations, layout: ButtonLayout, presenter: P, scheduler: S) -> Self {
        Self {
            mode: Mode::Idle,
            remaining_seconds: 0,
            durations,
            layout,
            tick_interval: Duration::from_secs(1),
            pending_tick: None,
            presenter,
            scheduler,
        }
    }

    /// Override the tick interval
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Draw the initial face and enter Idle
    pub fn start(&mut self) {
        info!(
            "Starting mode timer: prepare={}s, sport={}s, pause policy={:?}",
            self.durations.prepare_length,
            self.sport_length(),
            self.durations.pause_policy
        );
        self.presenter.set_sport_length_display(self.sport_length());
        self.switch_to_mode(Mode::Idle);
    }

    /// Enter `new_mode`, loading its duration and arming a tick if it counts down
    pub fn switch_to_mode(&mut self, new_mode: Mode) {
        self.cancel_pending_tick();

        info!("Switching mode: {:?} -> {:?}", self.mode, new_mode);
        self.mode = new_mode;
        self.presenter.set_mode_label(new_mode.label());

        self.remaining_seconds = match new_mode {
            Mode::Idle => 0,
            Mode::Prepare => i64::from(self.durations.prepare_length),
            Mode::Sport => i64::from(self.sport_length()),
            Mode::Pause => i64::from(self.pause_length()),
        };

        if new_mode.is_counting() {
            self.arm_tick();
        }

        self.check_invariants();
        self.presenter.set_countdown_display(self.remaining_seconds);
    }

    /// Primary button: start preparing from Idle or Pause, stop from Prepare or Sport
    pub fn advance(&mut self) {
        match self.mode {
            Mode::Idle | Mode::Pause => self.switch_to_mode(Mode::Prepare),
            Mode::Prepare | Mode::Sport => self.switch_to_mode(Mode::Idle),
        }
    }

    /// Secondary button: restart the prepare countdown, or lengthen a pause by one exercise
    pub fn restart(&mut self) {
        match self.mode {
            Mode::Prepare | Mode::Sport => self.switch_to_mode(Mode::Prepare),
            Mode::Pause => {
                let extra = self.sport_length();
                self.extend_current_pause(extra);
            }
            Mode::Idle => debug!("Restart ignored while idle"),
        }
    }

    /// Tertiary button: flip the exercise length while not exercising
    pub fn toggle_sport_length(&mut self) {
        match self.mode {
            Mode::Idle | Mode::Pause => {
                let seconds = self.durations.sport_length.toggle();
                info!("Sport length set to {}s", seconds);
                self.presenter.set_sport_length_display(seconds);
            }
            Mode::Prepare | Mode::Sport => {
                debug!("Sport length toggle ignored in {:?}", self.mode)
            }
        }
    }

    /// Lengthen a running pause by one full pause length
    pub fn extend_pause(&mut self) {
        if self.mode == Mode::Pause {
            let extra = self.pause_length();
            self.extend_current_pause(extra);
        } else {
            debug!("Pause extension ignored in {:?}", self.mode);
        }
    }

    /// One countdown step, run when the armed tick expires
    pub fn on_tick(&mut self) {
        // Cancelling a tick that already fired is a no-op for the scheduler
        self.cancel_pending_tick();
        self.remaining_seconds -= 1;
        debug!("Tick: {:?} {}s remaining", self.mode, self.remaining_seconds);

        if self.remaining_seconds == DOUBLE_PULSE_AT {
            self.presenter.pulse_double();
        } else if self.remaining_seconds == SHORT_PULSE_AT {
            self.presenter.pulse_short();
        }

        if self.remaining_seconds < REDRAW_EVERY || self.remaining_seconds % REDRAW_EVERY == 0 {
            self.presenter.set_countdown_display(self.remaining_seconds);
        }

        if self.remaining_seconds > 0 {
            self.arm_tick();
        } else {
            self.presenter.pulse_long();
            self.switch_to_mode(self.mode.next());
        }
    }

    /// Run [`on_tick`](Self::on_tick) if `handle` is the pending tick
    ///
    /// Returns false for stale handles, e.g. a tick that expired in the host
    /// just before it was cancelled.
    pub fn handle_tick(&mut self, handle: TickHandle) -> bool {
        if self.pending_tick != Some(handle) {
            debug!("Dropping stale tick {:?}", handle);
            return false;
        }
        self.on_tick();
        true
    }

    /// Run the action bound to `button` in the configured layout
    pub fn press(&mut self, button: Button) {
        let action = self.layout.action_for(button);
        debug!("Button {} -> {:?}", button, action);
        match action {
            Action::Advance => self.advance(),
            Action::Restart => self.restart(),
            Action::ToggleSportLength => self.toggle_sport_length(),
            Action::ExtendPause => self.extend_pause(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds
    }

    /// Current exercise length in seconds
    pub fn sport_length(&self) -> u32 {
        self.durations.sport_length.seconds()
    }

    /// Pause length under the configured policy
    pub fn pause_length(&self) -> u32 {
        self.durations.pause_policy.pause_length(self.sport_length())
    }

    /// Handle of the pending tick, if one is armed
    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.pending_tick
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Read-only view of the current state
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            label: self.mode.label(),
            remaining_seconds: self.remaining_seconds,
            sport_length: self.sport_length(),
            pause_length: self.pause_length(),
            tick_armed: self.pending_tick.is_some(),
        }
    }

    fn extend_current_pause(&mut self, extra: u32) {
        self.remaining_seconds += i64::from(extra);
        info!("Pause extended by {}s to {}s", extra, self.remaining_seconds);
        // The pause countdown is already armed
        self.check_invariants();
        self.presenter.set_countdown_display(self.remaining_seconds);
    }

    fn arm_tick(&mut self) {
        debug_assert!(self.pending_tick.is_none(), "tick armed twice");
        if let Some(stale) = self.pending_tick.take() {
            warn!("Replacing pending tick {:?}", stale);
            self.scheduler.cancel_tick(stale);
        }
        self.pending_tick = Some(self.scheduler.schedule_tick(self.tick_interval));
    }

    fn cancel_pending_tick(&mut self) {
        if let Some(handle) = self.pending_tick.take() {
            debug!("Cancelling pending tick {:?}", handle);
            self.scheduler.cancel_tick(handle);
        }
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.mode.is_counting() || self.remaining_seconds == 0,
            "idle with {}s remaining",
            self.remaining_seconds
        );
        debug_assert_eq!(
            self.mode.is_counting(),
            self.pending_tick.is_some(),
            "tick armed state does not match {:?}",
            self.mode
        );
    }
}

impl<P: Presenter, S: TickScheduler> EventHandler for ModeTimer<P, S> {
    fn on_button(&mut self, button: Button) {
        self.press(button);
    }

    fn on_tick(&mut self, handle: TickHandle) {
        self.handle_tick(handle);
    }

    fn snapshot(&self) -> TimerSnapshot {
        ModeTimer::snapshot(self)
    }
}

//! Countdown state machine.
//!
//! Time is driven from a wall-clock reference instant rather than by counting
//! frames, so dropped or delayed frames never skew the remaining time. Every
//! run is identified by a [`RunToken`]; a scheduled step only takes effect if
//! it still carries the token of the live run.

use crate::defaults::{MS_PER_SECOND, TOTAL_SECONDS};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Timer state visible to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    /// Remaining whole seconds, always within `0..=TOTAL_SECONDS`.
    pub time_left: u32,
    pub is_running: bool,
    /// Set by the first start, cleared only by reset.
    pub has_started: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            time_left: TOTAL_SECONDS,
            is_running: false,
            has_started: false,
        }
    }
}

impl TimerState {
    pub fn phase(&self) -> Phase {
        if !self.has_started {
            Phase::Idle
        } else if self.is_running {
            Phase::Running
        } else if self.time_left == 0 {
            Phase::Completed
        } else {
            Phase::Paused
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Identifies one run, from start until pause, completion or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunToken(u64);

/// Result of applying one animation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Still running; schedule another step.
    Continue,
    /// Reached zero and stopped.
    Completed,
    /// The step belonged to a run that has since stopped. Nothing changed.
    Stale,
}

#[derive(Debug, Clone, Copy)]
struct Run {
    token: RunToken,
    started_at_ms: f64,
    /// `time_left` when this run began.
    base_seconds: u32,
}

#[derive(Debug, Default)]
pub struct Countdown {
    state: TimerState,
    run: Option<Run>,
    next_token: u64,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Whether `token` still belongs to the running run.
    pub fn is_live(&self, token: RunToken) -> bool {
        self.run.is_some_and(|run| run.token == token)
    }

    /// Pause when running, start or resume otherwise.
    ///
    /// Returns the new run's token when a run was started.
    pub fn toggle(&mut self, now_ms: f64) -> Option<RunToken> {
        if self.state.is_running {
            self.pause();
            None
        } else {
            Some(self.start(now_ms))
        }
    }

    /// Start a fresh countdown, resume a paused one, or restart a completed one.
    ///
    /// Calling this while already running keeps the current run.
    pub fn start(&mut self, now_ms: f64) -> RunToken {
        if let Some(run) = self.run {
            if self.state.is_running {
                return run.token;
            }
        }

        if self.state.time_left == 0 {
            self.state.time_left = TOTAL_SECONDS;
        }
        self.state.has_started = true;
        self.state.is_running = true;

        let token = RunToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.run = Some(Run {
            token,
            started_at_ms: now_ms,
            base_seconds: self.state.time_left,
        });

        info!("Countdown running from {}s", self.state.time_left);
        token
    }

    /// Stop the current run, keeping the remaining time.
    pub fn pause(&mut self) {
        if self.run.take().is_some() {
            info!("Countdown paused at {}s", self.state.time_left);
        }
        self.state.is_running = false;
    }

    /// Back to a full, never-started countdown. Any scheduled step becomes stale.
    pub fn reset(&mut self) {
        self.run = None;
        self.state = TimerState::default();
        debug!("Countdown reset");
    }

    /// Recompute the remaining time for the run identified by `token`.
    pub fn tick(&mut self, token: RunToken, now_ms: f64) -> Step {
        let Some(run) = self.run.filter(|run| run.token == token) else {
            debug!("Ignoring step for stopped run {:?}", token);
            return Step::Stale;
        };

        // A clock reading from before the reference instant counts as no time.
        let elapsed_ms = (now_ms - run.started_at_ms).max(0.0);
        let elapsed_secs = (elapsed_ms / MS_PER_SECOND).floor() as u32;
        let time_left = run
            .base_seconds
            .saturating_sub(elapsed_secs)
            .min(TOTAL_SECONDS);

        if time_left != self.state.time_left {
            debug!("{}s left", time_left);
        }
        self.state.time_left = time_left;

        if time_left == 0 {
            self.state.is_running = false;
            self.run = None;
            info!("Countdown completed");
            Step::Completed
        } else {
            Step::Continue
        }
    }
}

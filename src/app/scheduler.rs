//! Two-state tick controller.
//!
//! The simulation core knows nothing about pausing: while paused the
//! scheduler simply never reports a tick as due, and the grid stays as it
//! was.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

#[derive(Debug)]
pub struct Scheduler {
    state: RunState,
    interval: Duration,
    last_tick: Instant,
}

impl Scheduler {
    pub fn new(interval: Duration, start_paused: bool) -> Self {
        Self {
            state: if start_paused {
                RunState::Paused
            } else {
                RunState::Running
            },
            interval,
            last_tick: Instant::now(),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn pause(&mut self) {
        self.state = RunState::Paused;
    }

    /// Restarts the cadence: the first tick after resuming comes one full
    /// interval later.
    pub fn resume(&mut self, now: Instant) {
        self.state = RunState::Running;
        self.last_tick = now;
    }

    pub fn toggle(&mut self, now: Instant) -> RunState {
        match self.state {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(now),
        }
        tracing::info!(state = ?self.state, "Scheduler toggled");
        self.state
    }

    pub fn tick_due(&self, now: Instant) -> bool {
        self.is_running() && now.saturating_duration_since(self.last_tick) >= self.interval
    }

    pub fn mark_ticked(&mut self, now: Instant) {
        self.last_tick = now;
    }
}

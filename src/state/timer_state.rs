//! Pomodoro countdown state

use serde::{Deserialize, Serialize};

use super::TrackerError;

/// Which countdown is currently running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Working,
    Break,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Working => "working",
            Phase::Break => "break",
        }
    }
}

/// Configured length of each phase, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseDurations {
    pub pomo_seconds: u64,
    pub break_seconds: u64,
}

impl PhaseDurations {
    pub fn new(pomo_seconds: u64, break_seconds: u64) -> Result<Self, TrackerError> {
        if pomo_seconds == 0 {
            return Err(TrackerError::ZeroDuration { phase: "pomodoro" });
        }
        if break_seconds == 0 {
            return Err(TrackerError::ZeroDuration { phase: "break" });
        }
        Ok(Self { pomo_seconds, break_seconds })
    }
}

/// A phase boundary crossed during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseChange {
    BreakStarted,
    WorkResumed,
}

/// Counters driven by the one-second tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub elapsed_total: u64,
    pub pomo_remaining: u64,
    pub break_remaining: u64,
    pub phase: Phase,
    pub pomo_count: u32,
    pub running: bool,
}

impl TimerState {
    /// Create a paused timer at the start of a working phase
    pub fn new(durations: &PhaseDurations) -> Self {
        Self {
            elapsed_total: 0,
            pomo_remaining: durations.pomo_seconds,
            break_remaining: durations.break_seconds,
            phase: Phase::Working,
            pomo_count: 0,
            running: false,
        }
    }

    /// Advance one second. Only the countdown of the phase held at the
    /// start of the tick moves, so at most one transition fires.
    pub fn tick(&mut self, durations: &PhaseDurations) -> Option<PhaseChange> {
        if !self.running {
            return None;
        }

        self.elapsed_total += 1;

        match self.phase {
            Phase::Working => {
                self.pomo_remaining = self.pomo_remaining.saturating_sub(1);
                if self.pomo_remaining == 0 {
                    self.phase = Phase::Break;
                    self.pomo_remaining = durations.pomo_seconds;
                    return Some(PhaseChange::BreakStarted);
                }
            }
            Phase::Break => {
                self.break_remaining = self.break_remaining.saturating_sub(1);
                if self.break_remaining == 0 {
                    self.finish_break(durations);
                    return Some(PhaseChange::WorkResumed);
                }
            }
        }

        None
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// End the current break early. Returns false while working.
    pub fn skip_break(&mut self, durations: &PhaseDurations) -> bool {
        if self.phase != Phase::Break {
            return false;
        }
        self.finish_break(durations);
        true
    }

    fn finish_break(&mut self, durations: &PhaseDurations) {
        self.pomo_count += 1;
        self.phase = Phase::Working;
        self.break_remaining = durations.break_seconds;
    }
}

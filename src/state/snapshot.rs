//! Rendered view of the tracker

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{LapId, Phase, Tracker};
use crate::utils::format_hms;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LapView {
    pub id: LapId,
    pub label: String,
    pub elapsed_seconds: u64,
    pub elapsed: String,
    pub active: bool,
}

/// Tracker state as shown to clients and logs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub running: bool,
    pub phase: Phase,
    pub pomo_count: u32,
    pub elapsed_total_seconds: u64,
    pub elapsed_total: String,
    pub pomo_remaining_seconds: u64,
    pub pomo_remaining: String,
    pub break_remaining_seconds: u64,
    pub break_remaining: String,
    pub laps: Vec<LapView>,
}

impl Snapshot {
    pub fn from_tracker(tracker: &Tracker) -> Self {
        let timer = &tracker.timer;
        let active = tracker.laps.current().map(|lap| lap.id);

        Self {
            running: timer.running,
            phase: timer.phase,
            pomo_count: timer.pomo_count,
            elapsed_total_seconds: timer.elapsed_total,
            elapsed_total: format_hms(timer.elapsed_total),
            pomo_remaining_seconds: timer.pomo_remaining,
            pomo_remaining: format_hms(timer.pomo_remaining),
            break_remaining_seconds: timer.break_remaining,
            break_remaining: format_hms(timer.break_remaining),
            laps: tracker
                .laps
                .iter()
                .map(|lap| LapView {
                    id: lap.id,
                    label: lap.label.clone(),
                    elapsed_seconds: lap.elapsed,
                    elapsed: format_hms(lap.elapsed),
                    active: Some(lap.id) == active,
                })
                .collect(),
        }
    }

    pub fn active_lap(&self) -> Option<&LapView> {
        self.laps.iter().find(|lap| lap.active)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.phase.label())?;
        if !self.running {
            write!(f, " paused")?;
        }
        write!(
            f,
            "] pomo {} | break {} | pomos {} | total {}",
            self.pomo_remaining, self.break_remaining, self.pomo_count, self.elapsed_total
        )?;
        match self.active_lap() {
            Some(lap) => write!(f, " | lap #{} {} {}", lap.id, lap.label, lap.elapsed),
            None => write!(f, " | no lap"),
        }
    }
}

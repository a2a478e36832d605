//! Timer/lap tracker and its command reducer

use serde::{Deserialize, Serialize};

use super::{
    LapId, LapList, PhaseChange, PhaseDurations, Snapshot, TimerState, TrackerError,
};

/// Everything that can change the tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Tick,
    ToggleRunning,
    AddTask(String),
    AdvanceLap,
    SkipBreak,
    RemoveTask(LapId),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Tick => "tick",
            Command::ToggleRunning => "toggle",
            Command::AddTask(_) => "add-task",
            Command::AdvanceLap => "lap",
            Command::SkipBreak => "skip-break",
            Command::RemoveTask(_) => "remove-task",
        }
    }
}

/// Effects a command had on the tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    BreakStarted,
    WorkResumed { pomo_count: u32 },
    BreakSkipped { pomo_count: u32 },
    RunningChanged { running: bool },
    LapAdded { id: LapId, label: String },
    LapAdvanced { id: LapId },
    LapRemoved { id: LapId, label: String },
}

/// Result of reducing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub tracker: Tracker,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tracker {
    pub timer: TimerState,
    pub laps: LapList,
    durations: PhaseDurations,
}

impl Tracker {
    pub fn new(durations: PhaseDurations) -> Self {
        Self {
            timer: TimerState::new(&durations),
            laps: LapList::new(),
            durations,
        }
    }

    pub fn durations(&self) -> &PhaseDurations {
        &self.durations
    }

    /// Apply a command in place. On error the tracker is left unchanged.
    pub fn apply(&mut self, command: Command) -> Result<Vec<Event>, TrackerError> {
        let mut events = Vec::new();

        match command {
            Command::Tick => {
                if self.timer.running {
                    self.laps.accrue();
                }
                match self.timer.tick(&self.durations) {
                    Some(PhaseChange::BreakStarted) => events.push(Event::BreakStarted),
                    Some(PhaseChange::WorkResumed) => events.push(Event::WorkResumed {
                        pomo_count: self.timer.pomo_count,
                    }),
                    None => {}
                }
            }
            Command::ToggleRunning => {
                self.timer.toggle_running();
                events.push(Event::RunningChanged { running: self.timer.running });
            }
            Command::AddTask(label) => {
                if let Some(lap) = self.laps.add(&label) {
                    events.push(Event::LapAdded { id: lap.id, label: lap.label.clone() });
                }
            }
            Command::AdvanceLap => {
                if let Some(id) = self.laps.advance() {
                    events.push(Event::LapAdvanced { id });
                }
            }
            Command::SkipBreak => {
                if self.timer.skip_break(&self.durations) {
                    events.push(Event::BreakSkipped { pomo_count: self.timer.pomo_count });
                }
            }
            Command::RemoveTask(id) => {
                let lap = self.laps.remove(id)?;
                events.push(Event::LapRemoved { id: lap.id, label: lap.label });
            }
        }

        Ok(events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_tracker(self)
    }
}

/// Compute the state that follows `command` without touching `tracker`
pub fn reduce(tracker: &Tracker, command: Command) -> Result<Step, TrackerError> {
    let mut next = tracker.clone();
    let events = next.apply(command)?;
    Ok(Step { tracker: next, events })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;

    fn tracker() -> Tracker {
        Tracker::new(PhaseDurations::new(1500, 300).unwrap())
    }

    fn run(tracker: Tracker, commands: impl IntoIterator<Item = Command>) -> Tracker {
        commands.into_iter().fold(tracker, |state, command| {
            reduce(&state, command).unwrap().tracker
        })
    }

    fn ticks(n: usize) -> impl Iterator<Item = Command> {
        std::iter::repeat(Command::Tick).take(n)
    }

    #[test]
    fn test_elapsed_total_counts_running_ticks() {
        let state = run(tracker(), [Command::ToggleRunning]);
        let state = run(state, ticks(42));
        assert_eq!(state.timer.elapsed_total, 42);
    }

    #[test]
    fn test_ticks_while_paused_change_nothing() {
        let mut state = tracker();
        state.apply(Command::AddTask("A".to_string())).unwrap();
        let after = run(state.clone(), ticks(5));
        assert_eq!(after, state);
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let state = run(tracker(), [Command::ToggleRunning]);
        let before = state.clone();
        let step = reduce(&state, Command::Tick).unwrap();
        assert_eq!(state, before);
        assert_eq!(step.tracker.timer.elapsed_total, 1);
        assert!(step.events.is_empty());
    }

    #[test]
    fn test_default_cycle_events() {
        let state = run(tracker(), [Command::ToggleRunning]);
        let state = run(state, ticks(1499));
        let step = reduce(&state, Command::Tick).unwrap();
        assert_eq!(step.events, vec![Event::BreakStarted]);
        assert_eq!(step.tracker.timer.phase, Phase::Break);
        assert_eq!(step.tracker.timer.pomo_remaining, 1500);

        let state = run(step.tracker, ticks(299));
        let step = reduce(&state, Command::Tick).unwrap();
        assert_eq!(step.events, vec![Event::WorkResumed { pomo_count: 1 }]);
        assert_eq!(step.tracker.timer.phase, Phase::Working);
        assert_eq!(step.tracker.timer.break_remaining, 300);
    }

    #[test]
    fn test_single_lap_scenario() {
        let state = run(
            tracker(),
            [Command::AddTask("A".to_string()), Command::ToggleRunning],
        );
        let state = run(state, ticks(10));
        assert_eq!(state.laps.current().unwrap().elapsed, 10);

        let step = reduce(&state, Command::AdvanceLap).unwrap();
        assert!(step.events.is_empty());
        assert_eq!(step.tracker.laps.current_index(), 0);
        assert_eq!(step.tracker.laps.current().unwrap().elapsed, 10);
    }

    #[test]
    fn test_lap_added_mid_run_starts_at_zero() {
        let state = run(
            tracker(),
            [Command::AddTask("A".to_string()), Command::ToggleRunning],
        );
        let state = run(state, ticks(3));
        let state = run(state, [Command::AddTask("B".to_string()), Command::AdvanceLap]);
        let state = run(state, ticks(2));

        let elapsed: Vec<u64> = state.laps.iter().map(|lap| lap.elapsed).collect();
        assert_eq!(elapsed, vec![3, 2]);
    }

    #[test]
    fn test_skip_break_while_working_is_noop() {
        let state = run(tracker(), [Command::ToggleRunning, Command::Tick]);
        let step = reduce(&state, Command::SkipBreak).unwrap();
        assert!(step.events.is_empty());
        assert_eq!(step.tracker, state);
    }

    #[test]
    fn test_skip_break_event() {
        let state = Tracker::new(PhaseDurations::new(1, 300).unwrap());
        let state = run(state, [Command::ToggleRunning, Command::Tick]);
        let step = reduce(&state, Command::SkipBreak).unwrap();
        assert_eq!(step.events, vec![Event::BreakSkipped { pomo_count: 1 }]);
    }

    #[test]
    fn test_blank_task_has_no_event() {
        let step = reduce(&tracker(), Command::AddTask("  ".to_string())).unwrap();
        assert!(step.events.is_empty());
        assert!(step.tracker.laps.is_empty());
    }

    #[test]
    fn test_added_task_event_carries_trimmed_label() {
        let step = reduce(&tracker(), Command::AddTask("  Write docs  ".to_string())).unwrap();
        assert_eq!(
            step.events,
            vec![Event::LapAdded { id: LapId(1), label: "Write docs".to_string() }]
        );
    }

    #[test]
    fn test_remove_unknown_task_fails() {
        let state = run(tracker(), [Command::AddTask("A".to_string())]);
        let err = reduce(&state, Command::RemoveTask(LapId(99))).unwrap_err();
        assert_eq!(err, TrackerError::UnknownLap(LapId(99)));
    }

    #[test]
    fn test_remove_task_event() {
        let mut state = tracker();
        let events = state.apply(Command::AddTask("A".to_string())).unwrap();
        let id = match &events[..] {
            [Event::LapAdded { id, .. }] => *id,
            other => panic!("unexpected events: {:?}", other),
        };
        let events = state.apply(Command::RemoveTask(id)).unwrap();
        assert_eq!(events, vec![Event::LapRemoved { id, label: "A".to_string() }]);
        assert!(state.laps.is_empty());
    }
}

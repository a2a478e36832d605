//! Shared daemon state

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info};

use super::{reduce, AppError, Command, Event, PhaseDurations, Snapshot, Tracker};

/// Outcome of a dispatched command
#[derive(Debug, Clone)]
pub struct Dispatched {
    pub snapshot: Snapshot,
    pub events: Vec<Event>,
}

impl Dispatched {
    /// Whether the command changed anything beyond a plain tick
    pub fn had_effect(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Application state shared between the ticker, reporter and HTTP handlers
#[derive(Debug)]
pub struct AppState {
    /// Timer and task laps
    pub tracker: Arc<Mutex<Tracker>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last user action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Latest rendered tracker state
    pub snapshot_tx: watch::Sender<Snapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _snapshot_rx: watch::Receiver<Snapshot>,
}

impl AppState {
    /// Create a new AppState with a paused tracker
    pub fn new(port: u16, host: String, durations: PhaseDurations) -> Self {
        let tracker = Tracker::new(durations);
        let (snapshot_tx, snapshot_rx) = watch::channel(tracker.snapshot());

        Self {
            tracker: Arc::new(Mutex::new(tracker)),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        }
    }

    /// Reduce a command against the tracker and publish the result
    pub fn dispatch(&self, command: Command) -> Result<Dispatched, AppError> {
        let action = command.name();
        let is_tick = command == Command::Tick;

        let mut tracker = self.tracker.lock()
            .map_err(|e| AppError::Lock(e.to_string()))?;

        let step = reduce(&tracker, command)?;
        *tracker = step.tracker;
        let snapshot = tracker.snapshot();
        drop(tracker); // Release the lock early

        for event in &step.events {
            log_event(event);
        }

        if !is_tick {
            debug!("Command '{}' produced {} event(s)", action, step.events.len());
            if let Ok(mut last_action) = self.last_action.lock() {
                *last_action = Some(action.to_string());
            }
            if let Ok(mut last_time) = self.last_action_time.lock() {
                *last_time = Some(Utc::now());
            }
        }

        self.snapshot_tx.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot.clone();
                true
            }
        });

        Ok(Dispatched { snapshot, events: step.events })
    }

    /// Get current tracker snapshot
    pub fn snapshot(&self) -> Result<Snapshot, AppError> {
        self.tracker.lock()
            .map(|tracker| tracker.snapshot())
            .map_err(|e| AppError::Lock(e.to_string()))
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;
        
        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

fn log_event(event: &Event) {
    match event {
        Event::BreakStarted => info!("Pomodoro finished, break started"),
        Event::WorkResumed { pomo_count } => {
            info!("Break over, back to work (pomodoros completed: {})", pomo_count)
        }
        Event::BreakSkipped { pomo_count } => {
            info!("Break skipped (pomodoros completed: {})", pomo_count)
        }
        Event::RunningChanged { running } => {
            info!("Timer {}", if *running { "started" } else { "paused" })
        }
        Event::LapAdded { id, label } => info!("Task #{} added: {}", id, label),
        Event::LapAdvanced { id } => info!("Lapped to task #{}", id),
        Event::LapRemoved { id, label } => info!("Task #{} removed: {}", id, label),
    }
}

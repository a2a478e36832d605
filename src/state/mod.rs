//! State management module
//! 
//! This module contains the timer/lap tracker, its reducer and the shared
//! daemon state wrapped around it.

pub mod app_state;
pub mod error;
pub mod lap_list;
pub mod snapshot;
pub mod timer_state;
pub mod tracker;

// Re-export main types
pub use app_state::{AppState, Dispatched};
pub use error::{AppError, TrackerError};
pub use lap_list::{Lap, LapId, LapList};
pub use snapshot::{LapView, Snapshot};
pub use timer_state::{Phase, PhaseChange, PhaseDurations, TimerState};
pub use tracker::{reduce, Command, Event, Step, Tracker};

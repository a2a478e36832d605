//! Error types for tracker and daemon state

use thiserror::Error;

use super::LapId;

/// Errors raised by tracker commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("{phase} duration must be at least one second")]
    ZeroDuration { phase: &'static str },

    #[error("no task with id {0}")]
    UnknownLap(LapId),
}

/// Errors raised while dispatching commands against the shared state
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to lock tracker state: {0}")]
    Lock(String),

    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

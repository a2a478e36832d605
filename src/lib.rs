//! Pomolap - A Pomodoro timer daemon with task lap tracking
//! 
//! This library provides the timer/lap tracker, a pure command reducer
//! over it, and the HTTP adapter and background tasks that drive it.

pub mod config;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, Command, Tracker};
pub use api::create_router;
pub use utils::signals::shutdown_signal;

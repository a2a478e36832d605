//! Background tasks module
//! 
//! This module contains background tasks that run alongside the HTTP server.

pub mod status_reporter;
pub mod ticker;

// Re-export main functions
pub use status_reporter::status_reporter_task;
pub use ticker::{ticker_task, TICK_INTERVAL};

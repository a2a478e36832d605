//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::{PhaseDurations, TrackerError};

/// Default pomodoro length: 25 minutes
pub const DEFAULT_POMO_SECONDS: u64 = 25 * 60;
/// Default break length: 5 minutes
pub const DEFAULT_BREAK_SECONDS: u64 = 5 * 60;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pomolap")]
#[command(about = "A Pomodoro timer daemon with task lap tracking")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Pomodoro (working) phase length in seconds
    #[arg(long = "pomo", default_value_t = DEFAULT_POMO_SECONDS, value_parser = clap::value_parser!(u64).range(1..))]
    pub pomo_seconds: u64,

    /// Break phase length in seconds
    #[arg(long = "break", default_value_t = DEFAULT_BREAK_SECONDS, value_parser = clap::value_parser!(u64).range(1..))]
    pub break_seconds: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Phase lengths for the tracker
    pub fn durations(&self) -> Result<PhaseDurations, TrackerError> {
        PhaseDurations::new(self.pomo_seconds, self.break_seconds)
    }
}

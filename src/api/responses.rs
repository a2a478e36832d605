//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::Snapshot;

/// Body of POST /tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTaskRequest {
    pub label: String,
}

/// API response structure for command endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub tracker: Snapshot,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, tracker: Snapshot) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            tracker,
        }
    }

    /// The command changed the tracker
    pub fn ok(message: String, tracker: Snapshot) -> Self {
        Self::new("ok".to_string(), message, tracker)
    }

    /// The command was accepted but had nothing to do
    pub fn ignored(message: String, tracker: Snapshot) -> Self {
        Self::new("ignored".to_string(), message, tracker)
    }
}

/// Status response with server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub tracker: Snapshot,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

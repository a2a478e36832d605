//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::state::{AppError, AppState, Command, Event, LapId, TrackerError};
use super::responses::{AddTaskRequest, ApiResponse, HealthResponse, StatusResponse};

/// Dispatch a command and wrap the outcome in an ApiResponse
fn run_command(
    state: &AppState,
    command: Command,
    done: impl FnOnce(&[Event]) -> String,
    ignored: &str,
) -> Result<Json<ApiResponse>, StatusCode> {
    let action = command.name();

    match state.dispatch(command) {
        Ok(dispatched) if dispatched.had_effect() => {
            let message = done(&dispatched.events);
            info!("{} endpoint called - {}", action, message);
            Ok(Json(ApiResponse::ok(message, dispatched.snapshot)))
        }
        Ok(dispatched) => {
            info!("{} endpoint called - {}", action, ignored);
            Ok(Json(ApiResponse::ignored(ignored.to_string(), dispatched.snapshot)))
        }
        Err(e) => Err(command_error(action, e)),
    }
}

/// Map a dispatch failure to an HTTP status
fn command_error(action: &str, e: AppError) -> StatusCode {
    match e {
        AppError::Tracker(e @ TrackerError::UnknownLap(_)) => {
            warn!("{} rejected: {}", action, e);
            StatusCode::NOT_FOUND
        }
        e => {
            error!("Failed to run {}: {}", action, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Handle POST /toggle - Start or pause the timer
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    // Toggling always takes effect
    match state.dispatch(Command::ToggleRunning) {
        Ok(dispatched) => {
            let message = if dispatched.snapshot.running { "Timer started" } else { "Timer paused" };
            info!("toggle endpoint called - {}", message);
            Ok(Json(ApiResponse::ok(message.to_string(), dispatched.snapshot)))
        }
        Err(e) => Err(command_error("toggle", e)),
    }
}

/// Handle POST /tasks - Append a task to the lap list
pub async fn add_task_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddTaskRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(
        &state,
        Command::AddTask(request.label),
        |events| match events.first() {
            Some(Event::LapAdded { id, label }) => format!("Task #{} added: {}", id, label),
            _ => "Task added".to_string(),
        },
        "Empty task label ignored",
    )
}

/// Handle DELETE /tasks/:id - Remove a task by id
pub async fn remove_task_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(
        &state,
        Command::RemoveTask(LapId(id)),
        |events| match events.first() {
            Some(Event::LapRemoved { id, label }) => format!("Task #{} removed: {}", id, label),
            _ => "Task removed".to_string(),
        },
        "Task unchanged",
    )
}

/// Handle POST /lap - Move the lap clock to the next task
pub async fn lap_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(
        &state,
        Command::AdvanceLap,
        |events| match events.first() {
            Some(Event::LapAdvanced { id }) => format!("Lapped to task #{}", id),
            _ => "Lapped".to_string(),
        },
        "Already on the last task",
    )
}

/// Handle POST /skip-break - End the current break early
pub async fn skip_break_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(
        &state,
        Command::SkipBreak,
        |events| match events.first() {
            Some(Event::BreakSkipped { pomo_count }) => {
                format!("Break skipped, {} pomodoro(s) completed", pomo_count)
            }
            _ => "Break skipped".to_string(),
        },
        "Not on a break",
    )
}

/// Handle GET /status - Return current tracker state
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let tracker = match state.snapshot() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to get tracker state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();
    
    Ok(Json(StatusResponse {
        tracker,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

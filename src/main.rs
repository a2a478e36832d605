//! Pomolap - A Pomodoro timer daemon with task lap tracking
//! 
//! This is the main entry point for the pomolap application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use pomolap::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::{status_reporter_task, ticker_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomolap={},tower_http=info", config.log_level()))
        .init();

    info!("Starting pomolap server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, pomo={}s, break={}s",
          config.host, config.port, config.pomo_seconds, config.break_seconds);

    let durations = config.durations()?;

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), durations));

    // Start the background tasks
    let ticker_state = Arc::clone(&state);
    tokio::spawn(async move {
        ticker_task(ticker_state).await;
    });

    let snapshot_rx = state.snapshot_tx.subscribe();
    tokio::spawn(async move {
        status_reporter_task(snapshot_rx).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;
    
    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST   /toggle     - Start or pause the timer");
    info!("  POST   /tasks      - Add a task ({{\"label\": \"...\"}})");
    info!("  DELETE /tasks/:id  - Remove a task");
    info!("  POST   /lap        - Lap to the next task");
    info!("  POST   /skip-break - Skip the current break");
    info!("  GET    /status     - Current timer and task times");
    info!("  GET    /health     - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);
    
    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        result = shutdown_signal() => {
            match result {
                Ok(()) => info!("Shutdown signal received"),
                Err(e) => tracing::error!("Failed to listen for shutdown signals: {}", e),
            }
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

//! One-second tick background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

use crate::state::{AppState, Command};

/// Fixed interval between ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Background task that feeds `Command::Tick` into the tracker.
///
/// Runs for the whole process lifetime; pausing only makes ticks no-ops.
pub async fn ticker_task(state: Arc<AppState>) {
    info!("Starting ticker task");

    let mut interval = interval(TICK_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately
    interval.tick().await;

    loop {
        interval.tick().await;

        if let Err(e) = state.dispatch(Command::Tick) {
            error!("Failed to advance tracker: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Phase, PhaseDurations};

    fn state(pomo: u64, brk: u64) -> Arc<AppState> {
        let durations = PhaseDurations::new(pomo, brk).unwrap();
        Arc::new(AppState::new(20554, "127.0.0.1".to_string(), durations))
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_second() {
        let state = state(2, 2);
        state.dispatch(Command::AddTask("A".to_string())).unwrap();
        state.dispatch(Command::ToggleRunning).unwrap();

        let ticker = tokio::spawn(ticker_task(Arc::clone(&state)));
        tokio::time::sleep(Duration::from_millis(2500)).await;

        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.elapsed_total_seconds, 2);
        assert_eq!(snapshot.phase, Phase::Break);
        assert_eq!(snapshot.active_lap().unwrap().elapsed_seconds, 2);

        ticker.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_paused_tracker_does_not_advance() {
        let state = state(1500, 300);

        let ticker = tokio::spawn(ticker_task(Arc::clone(&state)));
        tokio::time::sleep(Duration::from_millis(3500)).await;

        assert_eq!(state.snapshot().unwrap().elapsed_total_seconds, 0);
        ticker.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_tick_keeps_loop_alive() {
        let state = state(1500, 300);

        // Poison the tracker lock so every dispatch fails
        let tracker = Arc::clone(&state.tracker);
        let _ = std::thread::spawn(move || {
            let _guard = tracker.lock().unwrap();
            panic!("poisoning tracker lock");
        })
        .join();
        assert!(state.tracker.is_poisoned());

        let ticker = tokio::spawn(ticker_task(Arc::clone(&state)));
        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert!(!ticker.is_finished());
        ticker.abort();
    }
}

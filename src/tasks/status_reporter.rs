//! Status line reporter background task

use tokio::sync::watch;
use tracing::{debug, info};

use crate::state::Snapshot;

/// Background task that logs every published tracker snapshot.
///
/// Returns once the sending side of the channel is dropped.
pub async fn status_reporter_task(mut snapshot_rx: watch::Receiver<Snapshot>) {
    info!("Starting status reporter task");

    let initial = snapshot_rx.borrow_and_update().to_string();
    debug!("{}", initial);

    while snapshot_rx.changed().await.is_ok() {
        let line = snapshot_rx.borrow_and_update().to_string();
        debug!("{}", line);
    }

    info!("Snapshot channel closed, status reporter stopping");
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::state::{Command, PhaseDurations, Tracker};

    #[tokio::test]
    async fn test_reporter_stops_when_sender_dropped() {
        let mut tracker = Tracker::new(PhaseDurations::new(1500, 300).unwrap());
        let (tx, rx) = watch::channel(tracker.snapshot());
        let reporter = tokio::spawn(status_reporter_task(rx));

        tracker.apply(Command::ToggleRunning).unwrap();
        tx.send(tracker.snapshot()).unwrap();
        tokio::task::yield_now().await;
        assert!(!reporter.is_finished());

        drop(tx);
        tokio::time::timeout(Duration::from_secs(1), reporter)
            .await
            .expect("reporter should stop once the channel closes")
            .unwrap();
    }
}

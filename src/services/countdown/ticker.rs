//! Periodic countdown refresh.
//!
//! A [`CountdownTicker`] owns one tokio interval task. Each tick recomputes the
//! [`CountdownStatus`] and publishes it on a watch channel; displays subscribe
//! and re-render whenever a new value arrives. Stopping or dropping the ticker
//! aborts the task, which closes the channel for every subscriber.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::CountdownCalculator;
use crate::models::countdown::CountdownStatus;

/// Source of "now" for the ticker. Tests pin it to a fixed instant.
pub type Clock = Arc<dyn Fn() -> DateTime<Local> + Send + Sync>;

const MIN_PERIOD: Duration = Duration::from_millis(1);

pub struct CountdownTicker {
    handle: Option<JoinHandle<()>>,
    receiver: watch::Receiver<CountdownStatus>,
}

impl CountdownTicker {
    /// Start ticking against the system clock. Must be called from within a
    /// Tokio runtime.
    pub fn start(
        anniversary: Option<String>,
        calculator: CountdownCalculator,
        period: Duration,
    ) -> Self {
        Self::start_with_clock(anniversary, calculator, period, Arc::new(Local::now))
    }

    pub fn start_with_clock(
        anniversary: Option<String>,
        calculator: CountdownCalculator,
        period: Duration,
        clock: Clock,
    ) -> Self {
        let period = period.max(MIN_PERIOD);
        let initial = calculator.status(anniversary.as_deref(), &clock());
        let (sender, receiver) = watch::channel(initial);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick fires immediately and the initial status is
            // already published.
            interval.tick().await;

            loop {
                interval.tick().await;
                let status = calculator.status(anniversary.as_deref(), &clock());
                if sender.send(status).is_err() {
                    break;
                }
            }
        });

        log::info!("Countdown ticker started (period {:?})", period);

        Self {
            handle: Some(handle),
            receiver,
        }
    }

    /// A receiver that observes every published status.
    pub fn subscribe(&self) -> watch::Receiver<CountdownStatus> {
        self.receiver.clone()
    }

    /// The most recently published status.
    pub fn latest(&self) -> CountdownStatus {
        self.receiver.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the timer. Calling this more than once is harmless.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            log::info!("Countdown ticker stopped");
        }
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

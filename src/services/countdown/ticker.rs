//! Periodic countdown refresh.
//!
//! A [`CountdownTicker`] owns a tokio task that recomputes the breakdown on a
//! fixed cadence and publishes it through a watch channel. Observers read the
//! latest value or await changes; the task stops when the ticker is stopped or
//! dropped, or on its own once the countdown completes.

use std::time::Duration as StdDuration;

use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::calculator::compute_countdown;
use crate::models::countdown::CountdownBreakdown;

/// Refresh once per minute, matching the smallest displayed unit.
pub const DEFAULT_REFRESH_INTERVAL: StdDuration = StdDuration::from_secs(60);

/// Source of the current time for the ticker.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub struct CountdownTicker {
    receiver: watch::Receiver<CountdownBreakdown>,
    handle: JoinHandle<()>,
}

impl CountdownTicker {
    /// Computes the first breakdown immediately and spawns the refresh task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<Tz, C>(target: DateTime<Tz>, period: StdDuration, clock: C) -> Self
    where
        Tz: TimeZone + Send + Sync + 'static,
        Tz::Offset: Send + Sync,
        C: Clock,
    {
        let zone = target.timezone();
        let initial = compute_countdown(&clock.now().with_timezone(&zone), &target);
        let (sender, receiver) = watch::channel(initial);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick fires immediately; the initial value is already published.
            interval.tick().await;

            loop {
                let complete = sender.borrow().is_complete;
                if complete {
                    log::info!("Countdown to {target:?} complete, stopping refresh");
                    break;
                }

                interval.tick().await;
                let now = clock.now().with_timezone(&zone);
                let breakdown = compute_countdown(&now, &target);
                let changed = sender.send_if_modified(|current| {
                    if *current == breakdown {
                        false
                    } else {
                        *current = breakdown;
                        true
                    }
                });
                if changed {
                    log::debug!("Countdown refreshed: {breakdown:?}");
                }
            }
        });

        Self { receiver, handle }
    }

    /// Returns a receiver that observes every published breakdown.
    pub fn subscribe(&self) -> watch::Receiver<CountdownBreakdown> {
        self.receiver.clone()
    }

    /// The most recently published breakdown.
    pub fn current(&self) -> CountdownBreakdown {
        *self.receiver.borrow()
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Cancels further refreshes. The last published value stays readable.
    pub fn stop(&self) {
        self.handle.abort();
    }

    /// Waits until the refresh task has ended, either by completion or `stop`.
    pub async fn wait(&mut self) {
        if let Err(err) = (&mut self.handle).await {
            if !err.is_cancelled() {
                log::error!("Countdown refresh task failed: {err}");
            }
        }
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

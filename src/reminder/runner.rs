//! Periodic reminder loop.
//!
//! Drives [`ReminderScanner`](super::ReminderScanner) on a fixed
//! interval: one scan immediately on spawn, then one per tick. The
//! loop is cooperative (a scan is a short synchronous pass between
//! awaits) and idempotent per tick, so a delayed tick never double
//! fires alerts.
//!
//! Spawn the runner only while a session is active and the reminder
//! feature flag is on; abort it on logout or when the flag turns off.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::ReminderConfig;
use crate::session::SessionContext;
use crate::testing::AlertSink;

/// Handle to a running reminder loop.
///
/// Aborting the handle stops the loop; dropping it without aborting
/// leaves the loop running for the life of the runtime.
#[derive(Debug)]
pub struct ReminderRunner {
    handle: JoinHandle<()>,
}

impl ReminderRunner {
    /// Spawn the scan loop onto the current tokio runtime.
    ///
    /// The first scan runs immediately; subsequent scans follow the
    /// configured interval. Wall-clock "now" is sampled at each tick.
    #[must_use]
    pub fn spawn(
        ctx: Arc<Mutex<SessionContext>>,
        sink: Arc<dyn AlertSink>,
        config: ReminderConfig,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(config.interval());
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let now = chrono::Local::now().naive_local();
                let report = {
                    let mut session = ctx.lock().await;
                    session.run_reminder_scan(now, sink.as_ref())
                };
                if report.changed() {
                    tracing::info!(missed = report.missed.len(), "reminder tick");
                }
            }
        });

        Self { handle }
    }

    /// Stop the loop.
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Check whether the loop has stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

// ============================================================================
// Tests
// ============================================================================

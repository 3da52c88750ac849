//! Missed-task reminder scanning.
//!
//! This module contains the only component that mutates tasks outside
//! of direct user edits:
//!
//! - [`ReminderScanner`] - One scan pass: transition elapsed pending
//!   tasks to missed and fire a one-shot alert per task id
//! - [`alert`] - The in-crate tracing-backed alert sink
//! - [`runner`] - Periodic tokio loop driving scans on an interval
//!
//! # One-shot guarantee
//!
//! The scan re-evaluates every task on every tick, but the alert for a
//! given task id fires at most once per session. A seen-set keyed by
//! task id carries that guarantee; it is cleared on logout so the next
//! session can alert again.
//!
//! # Failure semantics
//!
//! Alert delivery errors (missing notification permission, no audio
//! device) are logged and swallowed. A malformed time string leaves
//! its task untouched and never halts the scan.

pub mod alert;
pub mod runner;

// Re-exports for convenience
pub use alert::LoggingAlertSink;
pub use runner::ReminderRunner;

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

use crate::task::{DayOfWeek, TaskId, TaskStatus, TaskStore};
use crate::testing::AlertSink;

/// Default seconds between scan ticks.
pub const DEFAULT_SCAN_INTERVAL_SECS: u64 = 30;

// ============================================================================
// Reminder Configuration
// ============================================================================

/// Configuration for the periodic reminder loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Seconds between scan ticks
    pub interval_secs: u64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_SCAN_INTERVAL_SECS,
        }
    }
}

impl ReminderConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scan interval in seconds.
    #[must_use]
    pub fn with_interval_secs(mut self, secs: u64) -> Self {
        self.interval_secs = secs;
        self
    }

    /// The scan interval as a duration.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

// ============================================================================
// Scan Report
// ============================================================================

/// Outcome of a single scan tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Tasks transitioned to missed this tick
    pub missed: Vec<TaskId>,
    /// Tasks whose one-shot alert fired this tick
    pub alerted: Vec<TaskId>,
}

impl ScanReport {
    /// Check if this tick changed anything.
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.missed.is_empty()
    }
}

// ============================================================================
// Reminder Scanner
// ============================================================================

/// Scans pending tasks whose scheduled window has elapsed today.
///
/// Each pass walks the full collection: pending tasks whose day label
/// matches today's weekday and whose parsed end time has passed become
/// missed. The first transition per task id also plays the reminder
/// tone and raises a desktop notification through the supplied
/// [`AlertSink`].
///
/// # Example
///
/// ```rust,ignore
/// let mut scanner = ReminderScanner::new();
/// let report = scanner.scan(&mut store, now, tone.as_deref(), &sink);
/// if report.changed() {
///     feed.recompute(store.as_slice(), now.date());
/// }
/// ```
#[derive(Debug, Default)]
pub struct ReminderScanner {
    /// Task ids that already fired their alert this session
    seen: HashSet<TaskId>,
}

impl ReminderScanner {
    /// Create a scanner with an empty seen-set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one scan pass over the store.
    ///
    /// `custom_tone` is the user-uploaded reminder tone, if any.
    /// Sink failures are logged and swallowed; the scan never stops on
    /// a single task.
    pub fn scan(
        &mut self,
        store: &mut TaskStore,
        now: NaiveDateTime,
        custom_tone: Option<&str>,
        sink: &dyn AlertSink,
    ) -> ScanReport {
        let mut report = ScanReport::default();
        let today = DayOfWeek::from_weekday(now.weekday());

        for task in store.tasks_mut() {
            if !task.status.is_pending() || task.day != today {
                continue;
            }
            if !task.window_elapsed(now) {
                continue;
            }

            task.status = TaskStatus::Missed;
            report.missed.push(task.id.clone());

            if self.seen.insert(task.id.clone()) {
                if let Err(err) = sink.play_tone(custom_tone) {
                    tracing::warn!(task = %task.id, "reminder tone failed: {err:#}");
                }
                let body = format!("{} was marked as missed.", task.title);
                if let Err(err) = sink.notify("Task missed", &body) {
                    tracing::warn!(task = %task.id, "reminder notification failed: {err:#}");
                }
                report.alerted.push(task.id.clone());
            }
        }

        if report.changed() {
            tracing::debug!(
                missed = report.missed.len(),
                alerted = report.alerted.len(),
                "reminder scan transitioned tasks"
            );
        }

        report
    }

    /// Check whether a task id has already alerted this session.
    #[must_use]
    pub fn has_alerted(&self, id: &TaskId) -> bool {
        self.seen.contains(id)
    }

    /// Clear the seen-set (logout).
    pub fn reset(&mut self) {
        self.seen.clear();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{DayOfWeek, Task};
    use crate::testing::MockAlertSink;
    use chrono::NaiveDate;

    fn wednesday_evening() -> NaiveDateTime {
        // Wed 2024-01-10, 20:30
        NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(20, 30, 0)
            .unwrap()
    }

    fn overdue_task() -> Task {
        Task::new("DSA Practice", "6:00pm - 8:00pm", DayOfWeek::Wed)
    }

    #[test]
    fn test_scan_marks_elapsed_pending_task_missed() {
        let mut store = TaskStore::new();
        let task = overdue_task();
        let id = task.id.clone();
        store.add(task);

        let sink = MockAlertSink::new();
        let mut scanner = ReminderScanner::new();
        let report = scanner.scan(&mut store, wednesday_evening(), None, &sink);

        assert_eq!(report.missed, vec![id.clone()]);
        assert_eq!(store.get(&id).unwrap().status, TaskStatus::Missed);
    }

    #[test]
    fn test_alert_fires_exactly_once_across_ticks() {
        let mut store = TaskStore::new();
        let task = overdue_task();
        let id = task.id.clone();
        store.add(task);

        let sink = MockAlertSink::new();
        let mut scanner = ReminderScanner::new();

        scanner.scan(&mut store, wednesday_evening(), None, &sink);
        assert_eq!(sink.tone_count(), 1);
        assert_eq!(sink.notification_count(), 1);
        assert!(scanner.has_alerted(&id));

        // Reopen the task so the next tick transitions it again; the
        // seen-set still suppresses the alert
        store.get_mut(&id).unwrap().status = TaskStatus::Pending;
        let report = scanner.scan(&mut store, wednesday_evening(), None, &sink);

        assert_eq!(report.missed, vec![id]);
        assert!(report.alerted.is_empty());
        assert_eq!(sink.tone_count(), 1);
        assert_eq!(sink.notification_count(), 1);
    }

    #[test]
    fn test_repeated_tick_without_reopen_is_idempotent() {
        let mut store = TaskStore::new();
        store.add(overdue_task());

        let sink = MockAlertSink::new();
        let mut scanner = ReminderScanner::new();
        scanner.scan(&mut store, wednesday_evening(), None, &sink);

        let report = scanner.scan(&mut store, wednesday_evening(), None, &sink);
        assert!(!report.changed());
        assert_eq!(sink.tone_count(), 1);
    }

    #[test]
    fn test_scan_skips_other_days() {
        let mut store = TaskStore::new();
        let task = Task::new("Thursday task", "6:00pm - 8:00pm", DayOfWeek::Thu);
        let id = task.id.clone();
        store.add(task);

        let sink = MockAlertSink::new();
        let mut scanner = ReminderScanner::new();
        let report = scanner.scan(&mut store, wednesday_evening(), None, &sink);

        assert!(!report.changed());
        assert_eq!(store.get(&id).unwrap().status, TaskStatus::Pending);
    }

    #[test]
    fn test_scan_skips_window_not_yet_elapsed() {
        let mut store = TaskStore::new();
        let task = Task::new("Late task", "9:00pm - 11:00pm", DayOfWeek::Wed);
        let id = task.id.clone();
        store.add(task);

        let sink = MockAlertSink::new();
        let mut scanner = ReminderScanner::new();
        scanner.scan(&mut store, wednesday_evening(), None, &sink);

        assert_eq!(store.get(&id).unwrap().status, TaskStatus::Pending);
        assert_eq!(sink.tone_count(), 0);
    }

    #[test]
    fn test_malformed_time_leaves_task_untouched() {
        let mut store = TaskStore::new();
        let task = Task::new("Unparseable", "after lunch", DayOfWeek::Wed);
        let id = task.id.clone();
        store.add(task);
        store.add(overdue_task());

        let sink = MockAlertSink::new();
        let mut scanner = ReminderScanner::new();
        let report = scanner.scan(&mut store, wednesday_evening(), None, &sink);

        // The malformed task is skipped; the scan still processes the rest
        assert_eq!(store.get(&id).unwrap().status, TaskStatus::Pending);
        assert_eq!(report.missed.len(), 1);
    }

    #[test]
    fn test_completed_and_missed_tasks_are_ignored() {
        let mut store = TaskStore::new();
        store.add(overdue_task().with_status(TaskStatus::Completed));
        store.add(overdue_task().with_status(TaskStatus::Missed));

        let sink = MockAlertSink::new();
        let mut scanner = ReminderScanner::new();
        let report = scanner.scan(&mut store, wednesday_evening(), None, &sink);

        assert!(!report.changed());
        assert_eq!(sink.tone_count(), 0);
    }

    #[test]
    fn test_sink_errors_are_swallowed() {
        let mut store = TaskStore::new();
        let task = overdue_task();
        let id = task.id.clone();
        store.add(task);

        let sink = MockAlertSink::new()
            .with_tone_error("no audio device")
            .with_notify_error("permission denied");
        let mut scanner = ReminderScanner::new();
        let report = scanner.scan(&mut store, wednesday_evening(), None, &sink);

        // The transition and the one-shot bookkeeping still happen
        assert_eq!(store.get(&id).unwrap().status, TaskStatus::Missed);
        assert_eq!(report.alerted, vec![id]);
    }

    #[test]
    fn test_custom_tone_passes_through() {
        let mut store = TaskStore::new();
        store.add(overdue_task());

        let sink = MockAlertSink::new();
        let mut scanner = ReminderScanner::new();
        scanner.scan(
            &mut store,
            wednesday_evening(),
            Some("data:audio/mp3;base64,BBBB"),
            &sink,
        );

        assert_eq!(
            sink.tones(),
            vec![Some("data:audio/mp3;base64,BBBB".to_string())]
        );
    }

    #[test]
    fn test_notification_body_names_the_task() {
        let mut store = TaskStore::new();
        store.add(overdue_task());

        let sink = MockAlertSink::new();
        let mut scanner = ReminderScanner::new();
        scanner.scan(&mut store, wednesday_evening(), None, &sink);

        let notifications = sink.notifications();
        assert_eq!(notifications[0].0, "Task missed");
        assert_eq!(notifications[0].1, "DSA Practice was marked as missed.");
    }

    #[test]
    fn test_reset_allows_alerting_again() {
        let mut store = TaskStore::new();
        let task = overdue_task();
        let id = task.id.clone();
        store.add(task);

        let sink = MockAlertSink::new();
        let mut scanner = ReminderScanner::new();
        scanner.scan(&mut store, wednesday_evening(), None, &sink);
        assert!(scanner.has_alerted(&id));

        scanner.reset();
        assert!(!scanner.has_alerted(&id));

        store.get_mut(&id).unwrap().status = TaskStatus::Pending;
        let report = scanner.scan(&mut store, wednesday_evening(), None, &sink);
        assert_eq!(report.alerted, vec![id]);
        assert_eq!(sink.tone_count(), 2);
    }

    #[test]
    fn test_config_builder() {
        let config = ReminderConfig::new().with_interval_secs(5);
        assert_eq!(config.interval(), Duration::from_secs(5));
        assert_eq!(
            ReminderConfig::default().interval_secs,
            DEFAULT_SCAN_INTERVAL_SECS
        );
    }
}

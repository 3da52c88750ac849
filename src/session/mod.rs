//! Session lifecycle and state.
//!
//! This module provides the unified session structure that composes
//! the engine's parts around the task store:
//!
//! ```text
//! SessionContext
//!   ├── profile: Option<UserProfile>   (login/logout lifecycle)
//!   ├── store: TaskStore               (single source of truth)
//!   ├── stats: StatsAggregator         (event-maintained counters)
//!   ├── notifications: NotificationFeed (recomputed on every change)
//!   ├── scanner: ReminderScanner       (seen-set, cleared on logout)
//!   └── reminder: ReminderSettings     (persisted feature flag + tone)
//! ```
//!
//! Every task mutation goes through the context so the read-side
//! projections stay in step: stats counters move on add/delete and the
//! notification list is recomputed wholesale after each change.
//!
//! [`UserData`] is the persisted blob exchanged with the backend; its
//! serde shape round-trips what the service stores per user.

pub mod saver;

// Re-exports for convenience
pub use saver::DebouncedSaver;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::notify::NotificationFeed;
use crate::reminder::{ReminderScanner, ScanReport};
use crate::stats::{DailyActivity, StatsAggregator, WeeklyStats};
use crate::task::{Category, DayOfWeek, Priority, Task, TaskId, TaskStatus, TaskStore};
use crate::testing::AlertSink;

// ============================================================================
// User Profile
// ============================================================================

/// Sanitized account identity for the active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
}

// ============================================================================
// Reminder Settings
// ============================================================================

/// Persisted reminder preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSettings {
    /// Feature flag for the missed-task reminder
    pub enabled: bool,
    /// User-uploaded reminder tone (data URL); `None` uses the default
    pub tone: Option<String>,
}

// ============================================================================
// User Data Blob
// ============================================================================

/// The per-user persisted blob.
///
/// Field names and optionality match what the backend stores, so
/// hydration tolerates missing or null fields from older records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserData {
    pub tasks: Vec<Task>,
    pub stats: Option<WeeklyStats>,
    pub profile_image: Option<String>,
    pub reminder_enabled: bool,
    pub reminder_tone: Option<String>,
}

// ============================================================================
// Starter Data
// ============================================================================

/// The seed schedule installed when a user's stored task list is empty.
#[must_use]
pub fn starter_tasks() -> Vec<Task> {
    fn seed(
        id: &str,
        title: &str,
        time: &str,
        day: DayOfWeek,
        category: Category,
        status: TaskStatus,
        color: &str,
        priority: Priority,
    ) -> Task {
        Task {
            id: TaskId::from_raw(id),
            title: title.to_string(),
            time: time.to_string(),
            day,
            category,
            status,
            priority,
            color: color.to_string(),
            due_date: None,
        }
    }

    vec![
        seed(
            "1",
            "Math Study",
            "9:00am - 11:00am",
            DayOfWeek::Mon,
            Category::Math,
            TaskStatus::Completed,
            "bg-blue-600",
            Priority::High,
        ),
        seed(
            "2",
            "Gym Workout",
            "7:00am - 8:00am",
            DayOfWeek::Tue,
            Category::Gym,
            TaskStatus::Completed,
            "bg-green-500",
            Priority::Medium,
        ),
        seed(
            "3",
            "DSA Practice",
            "6:00pm - 8:00pm",
            DayOfWeek::Wed,
            Category::Coding,
            TaskStatus::Pending,
            "bg-red-500",
            Priority::High,
        ),
        seed(
            "4",
            "History Review",
            "2:00pm - 3:30pm",
            DayOfWeek::Thu,
            Category::History,
            TaskStatus::Completed,
            "bg-green-600",
            Priority::Low,
        ),
        seed(
            "5",
            "Physics Class",
            "10:00am - 12:00pm",
            DayOfWeek::Fri,
            Category::Physics,
            TaskStatus::Completed,
            "bg-blue-500",
            Priority::Medium,
        ),
        seed(
            "6",
            "Read Book",
            "4:00pm - 5:00pm",
            DayOfWeek::Sat,
            Category::Reading,
            TaskStatus::Missed,
            "bg-red-500",
            Priority::Low,
        ),
    ]
}

/// The seed counters installed when no stats block is stored.
#[must_use]
pub fn starter_stats() -> WeeklyStats {
    WeeklyStats {
        hours_today: 4.5,
        tasks_planned: 12,
        tasks_completed: 8,
        performance: 76,
    }
}

// ============================================================================
// Session Context
// ============================================================================

/// The application root state for one logged-in user.
///
/// Owns the task store and keeps the read-side projections (stats
/// counters, notification list) in step with every mutation.
#[derive(Debug, Default)]
pub struct SessionContext {
    profile: Option<UserProfile>,
    store: TaskStore,
    stats: StatsAggregator,
    notifications: NotificationFeed,
    scanner: ReminderScanner,
    reminder: ReminderSettings,
    profile_image: Option<String>,
}

impl SessionContext {
    /// Create a logged-out context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a session is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    /// The active profile, if logged in.
    #[must_use]
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// The task store.
    #[must_use]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Current stats counters.
    #[must_use]
    pub fn stats(&self) -> &WeeklyStats {
        self.stats.stats()
    }

    /// Current hourly activity log.
    #[must_use]
    pub fn activity(&self) -> &DailyActivity {
        self.stats.activity()
    }

    /// Current notification list.
    #[must_use]
    pub fn notifications(&self) -> &NotificationFeed {
        &self.notifications
    }

    /// Current reminder settings.
    #[must_use]
    pub fn reminder_settings(&self) -> &ReminderSettings {
        &self.reminder
    }

    /// Current profile image (data URL), if set.
    #[must_use]
    pub fn profile_image(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Install a fetched account and its stored data (login).
    ///
    /// Empty stored task lists fall back to the starter schedule, and a
    /// missing stats block falls back to the starter counters, so a
    /// fresh account lands on a populated dashboard. Notifications are
    /// derived immediately against `today`.
    pub fn hydrate(&mut self, profile: UserProfile, data: UserData, today: NaiveDate) {
        self.profile = Some(profile);

        let tasks = if data.tasks.is_empty() {
            starter_tasks()
        } else {
            data.tasks
        };
        self.store.replace_all(tasks);
        self.stats.set_stats(data.stats.unwrap_or_else(starter_stats));
        self.profile_image = data.profile_image;
        self.reminder = ReminderSettings {
            enabled: data.reminder_enabled,
            tone: data.reminder_tone,
        };

        self.notifications.recompute(self.store.as_slice(), today);
        tracing::info!(tasks = self.store.len(), "session hydrated");
    }

    /// Reset to the logged-out state.
    ///
    /// Clears the store, counters, notifications and the scanner's
    /// one-shot seen-set, so the next login starts clean.
    pub fn logout(&mut self) {
        self.profile = None;
        self.store.clear();
        self.stats.reset();
        self.notifications.clear();
        self.scanner.reset();
        self.reminder = ReminderSettings::default();
        self.profile_image = None;
        tracing::info!("session reset to logged-out");
    }

    /// The persisted blob for the debounced save.
    #[must_use]
    pub fn snapshot(&self) -> UserData {
        UserData {
            tasks: self.store.to_vec(),
            stats: Some(self.stats.snapshot()),
            profile_image: self.profile_image.clone(),
            reminder_enabled: self.reminder.enabled,
            reminder_tone: self.reminder.tone.clone(),
        }
    }

    // ========================================================================
    // Task Mutations
    // ========================================================================

    /// Add a task and update the projections.
    pub fn add_task(&mut self, task: Task, today: NaiveDate) {
        self.store.add(task);
        self.stats.record_task_added();
        self.notifications.recompute(self.store.as_slice(), today);
    }

    /// Replace an edited task by id.
    ///
    /// Returns `false` (leaving everything unchanged) when no task has
    /// that id. Edits don't touch the planned counter.
    pub fn update_task(&mut self, task: Task, today: NaiveDate) -> bool {
        let updated = self.store.update(task);
        if updated {
            self.notifications.recompute(self.store.as_slice(), today);
        }
        updated
    }

    /// Delete a task and update the projections.
    pub fn remove_task(&mut self, id: &TaskId, today: NaiveDate) -> Option<Task> {
        let removed = self.store.remove(id)?;
        self.stats.record_task_removed();
        self.notifications.recompute(self.store.as_slice(), today);
        Some(removed)
    }

    // ========================================================================
    // Settings & Time Log
    // ========================================================================

    /// Update reminder preferences.
    pub fn set_reminder_settings(&mut self, settings: ReminderSettings) {
        self.reminder = settings;
    }

    /// Set or clear the profile image (data URL).
    pub fn set_profile_image(&mut self, image: Option<String>) {
        self.profile_image = image;
    }

    /// Save a duration log for an hour bucket.
    ///
    /// # Errors
    ///
    /// Returns a validation error for hours outside 0-23.
    pub fn log_duration(&mut self, hour: usize, minutes: u32) -> Result<u32> {
        self.stats.log_duration(hour, minutes)
    }

    /// Clear unread flags on the current notification list.
    pub fn mark_notifications_read(&mut self) {
        self.notifications.mark_all_read();
    }

    // ========================================================================
    // Reminder Scan
    // ========================================================================

    /// Run one reminder scan tick.
    ///
    /// A no-op unless a session is active and the reminder flag is on.
    /// When the scan transitions tasks, the notification list is
    /// recomputed against the tick's date.
    pub fn run_reminder_scan(&mut self, now: NaiveDateTime, sink: &dyn AlertSink) -> ScanReport {
        if !self.is_authenticated() || !self.reminder.enabled {
            return ScanReport::default();
        }

        let report = self
            .scanner
            .scan(&mut self.store, now, self.reminder.tone.as_deref(), sink);
        if report.changed() {
            self.notifications
                .recompute(self.store.as_slice(), now.date());
        }
        report
    }
}

// ============================================================================
// Tests
// ============================================================================

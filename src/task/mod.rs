//! Task domain model.
//!
//! This module contains the task record and its supporting vocabulary:
//!
//! - [`store`] - In-memory task collection (the single source of truth)
//! - [`window`] - Scheduled time-window parsing and elapsed checks
//!
//! A task is scheduled against a *weekday* ("Mon".."Sun") and a textual
//! time range ("9:00am - 11:00am"), so it recurs identically in every
//! week the calendar shows. The optional due date is an independent
//! calendar-date attribute used only for notification bucketing.

pub mod store;
pub mod window;

// Re-exports for convenience
pub use store::{StatusCounts, TaskStore};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Task Identifier
// ============================================================================

/// Opaque identifier for a task.
///
/// Newly created tasks get a UUIDv4 string; hydrated tasks keep whatever
/// opaque string the stored blob carried (the original data set used
/// short numeric strings).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier string.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Vocabulary Enums
// ============================================================================

/// Subject category for a task (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Math,
    Coding,
    History,
    Physics,
    Gym,
    Reading,
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Math => "Math",
            Category::Coding => "Coding",
            Category::History => "History",
            Category::Physics => "Physics",
            Category::Gym => "Gym",
            Category::Reading => "Reading",
            Category::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        write!(f, "{}", name)
    }
}

/// Current status of a task.
///
/// # Status Transitions
///
/// - `Pending` -> `Completed`: the user finished the task
/// - `Pending` -> `Missed`: the reminder scanner saw the window elapse,
///   or the user marked it missed
/// - `Completed`/`Missed` -> `Pending`: manual reopen through an edit
///
/// The scanner only ever performs `Pending` -> `Missed`; manual edits
/// replace the record wholesale and may set any status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
    Missed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
            TaskStatus::Missed => "missed",
        };
        write!(f, "{}", name)
    }
}

impl TaskStatus {
    /// Check if this status can transition to the target status.
    ///
    /// # Example
    ///
    /// ```
    /// use studyflow::task::TaskStatus;
    ///
    /// assert!(TaskStatus::Pending.can_transition_to(TaskStatus::Missed));
    /// assert!(!TaskStatus::Completed.can_transition_to(TaskStatus::Missed));
    /// ```
    #[must_use]
    pub fn can_transition_to(&self, target: TaskStatus) -> bool {
        use TaskStatus::*;
        matches!(
            (self, target),
            (Pending, Completed) | (Pending, Missed) | (Completed, Pending) | (Missed, Pending)
        )
    }

    /// Check if this status still awaits action.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, TaskStatus::Pending)
    }
}

// ============================================================================
// Day Labels
// ============================================================================

/// Day-of-week label a task is scheduled against.
///
/// Serialized with the three-letter labels the stored blob uses
/// ("Mon".."Sun"). Ordering is Monday-first, matching the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayOfWeek {
    /// All days in Monday-first order.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Mon,
        DayOfWeek::Tue,
        DayOfWeek::Wed,
        DayOfWeek::Thu,
        DayOfWeek::Fri,
        DayOfWeek::Sat,
        DayOfWeek::Sun,
    ];

    /// Get the three-letter label for this day.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DayOfWeek::Mon => "Mon",
            DayOfWeek::Tue => "Tue",
            DayOfWeek::Wed => "Wed",
            DayOfWeek::Thu => "Thu",
            DayOfWeek::Fri => "Fri",
            DayOfWeek::Sat => "Sat",
            DayOfWeek::Sun => "Sun",
        }
    }

    /// Convert from a chrono weekday.
    #[must_use]
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Mon,
            Weekday::Tue => DayOfWeek::Tue,
            Weekday::Wed => DayOfWeek::Wed,
            Weekday::Thu => DayOfWeek::Thu,
            Weekday::Fri => DayOfWeek::Fri,
            Weekday::Sat => DayOfWeek::Sat,
            Weekday::Sun => DayOfWeek::Sun,
        }
    }

    /// Get the label for a calendar date.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use studyflow::task::DayOfWeek;
    ///
    /// let wed = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    /// assert_eq!(DayOfWeek::from_date(wed), DayOfWeek::Wed);
    /// ```
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_weekday(date.weekday())
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Task
// ============================================================================

/// A scheduled task record.
///
/// The serde shape round-trips the stored user-data blob, so field names
/// and enum spellings must stay wire-compatible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Display title
    pub title: String,
    /// Scheduled time range, e.g. "9:00am - 11:00am"
    pub time: String,
    /// Weekday the task recurs on
    pub day: DayOfWeek,
    /// Subject category
    pub category: Category,
    /// Current status
    pub status: TaskStatus,
    /// Priority level
    pub priority: Priority,
    /// Display color tag carried for the UI, e.g. "bg-blue-600"
    pub color: String,
    /// Optional due date, independent of the weekly time window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Create a new pending task with default category, priority and color.
    #[must_use]
    pub fn new(title: impl Into<String>, time: impl Into<String>, day: DayOfWeek) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            time: time.into(),
            day,
            category: Category::Other,
            status: TaskStatus::Pending,
            priority: Priority::Medium,
            color: "bg-blue-600".to_string(),
            due_date: None,
        }
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Set the status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the display color tag.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the due date.
    #[must_use]
    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }

    /// Check whether this task's scheduled window has elapsed at `now`.
    ///
    /// Delegates to [`window::window_elapsed`]; an unparseable time
    /// range never counts as elapsed.
    #[must_use]
    pub fn window_elapsed(&self, now: chrono::NaiveDateTime) -> bool {
        window::window_elapsed(self.day, &self.time, now)
    }
}

// ============================================================================
// Tests
// ============================================================================

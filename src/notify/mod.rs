//! Notification derivation.
//!
//! The notification list is a pure projection of the task collection:
//! one entry per missed task plus one per due-date proximity bucket
//! (today / tomorrow / overdue), excluding completed tasks. It is
//! recomputed wholesale on every task-collection change - never merged
//! or patched - which means unread flags reset whenever tasks change.
//! That reset is an accepted property of the design, not a bug.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::task::{Task, TaskStatus};

// ============================================================================
// Notification Kind
// ============================================================================

/// Visual severity of a notification entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
}

// ============================================================================
// Due Bucket
// ============================================================================

/// Due-date proximity classification relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueBucket {
    /// Due exactly today
    Today,
    /// Due exactly tomorrow
    Tomorrow,
    /// Past due by `days` whole days (always >= 1)
    Overdue { days: i64 },
}

impl DueBucket {
    /// Classify a due date against today.
    ///
    /// Returns `None` for dates two or more days out - those are not
    /// surfaced until they get close.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use studyflow::notify::DueBucket;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    /// let yesterday = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
    /// assert_eq!(
    ///     DueBucket::classify(yesterday, today),
    ///     Some(DueBucket::Overdue { days: 1 })
    /// );
    /// ```
    #[must_use]
    pub fn classify(due: NaiveDate, today: NaiveDate) -> Option<Self> {
        let diff = (due - today).num_days();
        match diff {
            0 => Some(DueBucket::Today),
            1 => Some(DueBucket::Tomorrow),
            d if d < 0 => Some(DueBucket::Overdue { days: -d }),
            _ => None,
        }
    }
}

impl fmt::Display for DueBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueBucket::Today => write!(f, "Today"),
            DueBucket::Tomorrow => write!(f, "Tomorrow"),
            DueBucket::Overdue { days } => write!(f, "{} days ago", days),
        }
    }
}

// ============================================================================
// Notification Item
// ============================================================================

/// A single user-facing notification entry.
///
/// Ids are sequential within one derivation and restart at 1 on every
/// recompute; they are display handles, not stable identities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub id: u32,
    pub text: String,
    /// Short time label shown next to the text ("Today", "3 days ago", ...)
    pub time: String,
    pub unread: bool,
    pub kind: NotificationKind,
}

// ============================================================================
// Derivation
// ============================================================================

/// Derive a fresh notification list from the task collection.
///
/// Missed-task entries come first, then due-date buckets in task
/// order. Completed tasks produce no due-date entries.
#[must_use]
pub fn derive(tasks: &[Task], today: NaiveDate) -> Vec<NotificationItem> {
    let mut items = Vec::new();
    let mut next_id = 1u32;
    let mut push = |items: &mut Vec<NotificationItem>, text: String, time: &str, kind| {
        items.push(NotificationItem {
            id: next_id,
            text,
            time: time.to_string(),
            unread: true,
            kind,
        });
        next_id += 1;
    };

    for task in tasks.iter().filter(|t| t.status == TaskStatus::Missed) {
        push(
            &mut items,
            format!("Missed task: {}", task.title),
            "Check schedule",
            NotificationKind::Error,
        );
    }

    for task in tasks.iter().filter(|t| t.status != TaskStatus::Completed) {
        let Some(due) = task.due_date else { continue };
        match DueBucket::classify(due, today) {
            Some(DueBucket::Today) => push(
                &mut items,
                format!("Due today: {}", task.title),
                "Today",
                NotificationKind::Warning,
            ),
            Some(DueBucket::Tomorrow) => push(
                &mut items,
                format!("Due tomorrow: {}", task.title),
                "Tomorrow",
                NotificationKind::Info,
            ),
            Some(bucket @ DueBucket::Overdue { .. }) => push(
                &mut items,
                format!("Overdue: {}", task.title),
                &bucket.to_string(),
                NotificationKind::Error,
            ),
            None => {}
        }
    }

    items
}

// ============================================================================
// Notification Feed
// ============================================================================

/// Holds the current notification list for the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationFeed {
    items: Vec<NotificationItem>,
}

impl NotificationFeed {
    /// Create an empty feed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wholesale-replace the list from the current task collection.
    ///
    /// Unread flags reset on every call; acknowledging notifications
    /// and then changing an unrelated task un-reads them again.
    pub fn recompute(&mut self, tasks: &[Task], today: NaiveDate) {
        self.items = derive(tasks, today);
    }

    /// Clear the unread flag on every entry.
    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.unread = false;
        }
    }

    /// Number of unread entries.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| n.unread).count()
    }

    /// Borrow the current entries.
    #[must_use]
    pub fn items(&self) -> &[NotificationItem] {
        &self.items
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the feed is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every entry (logout).
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Aggregate stats counters.
//!
//! `WeeklyStats` is the persisted counter block shown on the dashboard
//! stat cards. It is maintained *incrementally* by task CRUD and
//! duration-log events - never recomputed from the task collection -
//! so it is an approximation the caller keeps honest, not a derived
//! view. That shortcut is inherited behavior and callers rely on it
//! (hydrated historical counters survive even when the stored task
//! list does not reproduce them).

use serde::{Deserialize, Serialize};

use crate::error::{Result, StudyflowError};

/// Number of hour buckets in a day's activity log.
pub const HOUR_BUCKETS: usize = 24;

// ============================================================================
// Weekly Stats
// ============================================================================

/// Aggregate dashboard counters, persisted in the user-data blob.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    /// Hours focused today
    pub hours_today: f64,
    /// Total tasks planned
    pub tasks_planned: u32,
    /// Total tasks completed
    pub tasks_completed: u32,
    /// Performance score, 0-100
    pub performance: u32,
}

impl Default for WeeklyStats {
    fn default() -> Self {
        Self {
            hours_today: 0.0,
            tasks_planned: 0,
            tasks_completed: 0,
            performance: 0,
        }
    }
}

// ============================================================================
// Daily Activity
// ============================================================================

/// Per-hour logged minutes for the time-log view.
///
/// Buckets run midnight-first: index 0 is "12 AM", index 13 is "1 PM".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    minutes: Vec<u32>,
}

impl Default for DailyActivity {
    fn default() -> Self {
        Self {
            minutes: vec![0; HOUR_BUCKETS],
        }
    }
}

impl DailyActivity {
    /// Create an empty activity log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Display label for an hour bucket ("12 AM" .. "11 PM").
    ///
    /// # Example
    ///
    /// ```
    /// use studyflow::stats::DailyActivity;
    ///
    /// assert_eq!(DailyActivity::label(0), "12 AM");
    /// assert_eq!(DailyActivity::label(13), "1 PM");
    /// ```
    #[must_use]
    pub fn label(hour: usize) -> String {
        let period = if hour < 12 { "AM" } else { "PM" };
        let display = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{} {}", display, period)
    }

    /// Logged minutes for an hour bucket.
    #[must_use]
    pub fn minutes(&self, hour: usize) -> u32 {
        self.minutes.get(hour).copied().unwrap_or(0)
    }

    /// Overwrite an hour bucket, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns a validation error for hours outside 0-23.
    pub fn set_minutes(&mut self, hour: usize, minutes: u32) -> Result<u32> {
        let slot = self.minutes.get_mut(hour).ok_or_else(|| {
            StudyflowError::validation("hour", format!("bucket {} out of range", hour))
        })?;
        Ok(std::mem::replace(slot, minutes))
    }

    /// Iterate (label, minutes) pairs in hour order.
    pub fn buckets(&self) -> impl Iterator<Item = (String, u32)> + '_ {
        self.minutes
            .iter()
            .enumerate()
            .map(|(hour, &m)| (Self::label(hour), m))
    }
}

// ============================================================================
// Stats Aggregator
// ============================================================================

/// Owns the session's counters and applies CRUD/duration events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsAggregator {
    stats: WeeklyStats,
    activity: DailyActivity,
}

impl StatsAggregator {
    /// Create an aggregator with zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install hydrated counters (login), keeping the activity log.
    pub fn set_stats(&mut self, stats: WeeklyStats) {
        self.stats = stats;
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> &WeeklyStats {
        &self.stats
    }

    /// Current activity log.
    #[must_use]
    pub fn activity(&self) -> &DailyActivity {
        &self.activity
    }

    /// Copy of the counters for the save snapshot.
    #[must_use]
    pub fn snapshot(&self) -> WeeklyStats {
        self.stats
    }

    /// A task was added: planned count goes up by one.
    pub fn record_task_added(&mut self) {
        self.stats.tasks_planned += 1;
    }

    /// A task was deleted: planned count goes down by one.
    pub fn record_task_removed(&mut self) {
        self.stats.tasks_planned = self.stats.tasks_planned.saturating_sub(1);
    }

    /// A duration log was saved for an hour bucket.
    ///
    /// Overwrites the bucket and credits the *logged* minutes to
    /// `hoursToday`. The credit is additive even when the bucket
    /// already held a value - the counter is an approximation by
    /// contract, not a sum over buckets.
    ///
    /// # Errors
    ///
    /// Returns a validation error for hours outside 0-23; the counters
    /// are untouched in that case.
    pub fn log_duration(&mut self, hour: usize, minutes: u32) -> Result<u32> {
        let previous = self.activity.set_minutes(hour, minutes)?;
        self.stats.hours_today += f64::from(minutes) / 60.0;
        Ok(previous)
    }

    /// Reset all counters to zero (logout).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Tests
// ============================================================================

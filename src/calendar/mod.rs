//! Calendar view projection.
//!
//! Given a reference date and a view granularity, this module derives
//! the concrete set of calendar cells the UI renders and which tasks
//! fall into each cell. Projection is pure: it never stores anything
//! and is recomputed on every task-collection change.
//!
//! Task membership is by weekday label, not exact calendar date, so a
//! task recurs identically across every week and month shown. Due
//! dates play no part here; they only feed notification bucketing.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::task::{DayOfWeek, Task, TaskStatus};

/// Number of cells in the monthly grid (five Monday-first rows).
pub const MONTH_GRID_DAYS: usize = 35;

// ============================================================================
// View Mode
// ============================================================================

/// Calendar view granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewMode::Daily => "Daily",
            ViewMode::Weekly => "Weekly",
            ViewMode::Monthly => "Monthly",
        };
        write!(f, "{}", name)
    }
}

impl ViewMode {
    /// Step the reference date backward or forward by `delta` periods.
    ///
    /// Daily moves by days, Weekly by seven days, Monthly by calendar
    /// months (clamping to the shorter month's last day).
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use studyflow::calendar::ViewMode;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    /// let next = ViewMode::Weekly.step(date, 1);
    /// assert_eq!(next, NaiveDate::from_ymd_opt(2024, 1, 17).unwrap());
    /// ```
    #[must_use]
    pub fn step(&self, date: NaiveDate, delta: i32) -> NaiveDate {
        match self {
            ViewMode::Daily => shift_days(date, i64::from(delta)),
            ViewMode::Weekly => shift_days(date, i64::from(delta) * 7),
            ViewMode::Monthly => {
                let months = Months::new(delta.unsigned_abs());
                let shifted = if delta >= 0 {
                    date.checked_add_months(months)
                } else {
                    date.checked_sub_months(months)
                };
                shifted.unwrap_or(date)
            }
        }
    }
}

fn shift_days(date: NaiveDate, delta: i64) -> NaiveDate {
    let days = Days::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    };
    shifted.unwrap_or(date)
}

// ============================================================================
// Status Filter
// ============================================================================

/// Optional status narrowing for cell membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
    Missed,
}

impl StatusFilter {
    /// Check if a task status passes this filter.
    #[must_use]
    pub fn matches(&self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Completed => status == TaskStatus::Completed,
            StatusFilter::Pending => status == TaskStatus::Pending,
            StatusFilter::Missed => status == TaskStatus::Missed,
        }
    }
}

// ============================================================================
// Calendar Cell
// ============================================================================

/// A single cell in a projected calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    /// Weekday label shown in the cell header
    pub day: DayOfWeek,
    /// Concrete calendar date of the cell
    pub date: NaiveDate,
    /// Whether the cell falls inside the reference month.
    ///
    /// Always true for Daily and Weekly views; Monthly grids flag
    /// leading/trailing spillover cells so they render dimmed instead
    /// of being omitted.
    pub is_current_month: bool,
}

impl CalendarCell {
    fn new(date: NaiveDate, is_current_month: bool) -> Self {
        Self {
            day: DayOfWeek::from_date(date),
            date,
            is_current_month,
        }
    }
}

// ============================================================================
// Projection
// ============================================================================

/// Monday of the week containing `date`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use studyflow::calendar::week_start;
///
/// let wed = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// assert_eq!(week_start(wed), NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
/// ```
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    shift_days(date, -i64::from(date.weekday().num_days_from_monday()))
}

/// Project a reference date into an ordered sequence of calendar cells.
///
/// - Daily: exactly one cell for the reference date.
/// - Weekly: seven cells from the Monday of the reference week.
/// - Monthly: [`MONTH_GRID_DAYS`] cells from the Monday on/before the
///   first of the month, each flagged whether it falls in the month.
#[must_use]
pub fn project(reference: NaiveDate, mode: ViewMode) -> Vec<CalendarCell> {
    match mode {
        ViewMode::Daily => vec![CalendarCell::new(reference, true)],
        ViewMode::Weekly => {
            let start = week_start(reference);
            (0..7)
                .map(|i| CalendarCell::new(shift_days(start, i), true))
                .collect()
        }
        ViewMode::Monthly => {
            // with_day(1) cannot fail for a date that already exists
            let first = reference.with_day(1).unwrap_or(reference);
            let start = week_start(first);
            (0..MONTH_GRID_DAYS as i64)
                .map(|i| {
                    let date = shift_days(start, i);
                    let in_month =
                        date.month() == reference.month() && date.year() == reference.year();
                    CalendarCell::new(date, in_month)
                })
                .collect()
        }
    }
}

/// Tasks belonging to a cell date, narrowed by a status filter.
///
/// Membership compares the date's weekday label against each task's
/// day label; every week shows the same recurring schedule.
#[must_use]
pub fn tasks_for_date<'a>(
    tasks: &'a [Task],
    date: NaiveDate,
    filter: StatusFilter,
) -> Vec<&'a Task> {
    let day = DayOfWeek::from_date(date);
    tasks
        .iter()
        .filter(|t| t.day == day && filter.matches(t.status))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

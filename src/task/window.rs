//! Scheduled time-window parsing.
//!
//! Task windows are stored as free text ("9:00am - 11:00am"). Only the
//! *end* of the range matters to the engine: the reminder scanner needs
//! to know when a pending task's slot has passed. Parsing fails open:
//! a string that doesn't match the expected pattern yields `None` and
//! the task is left untouched indefinitely.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;

use super::DayOfWeek;

/// Pattern for the end-of-window clock time, matched case-insensitively.
const END_TIME_PATTERN: &str = r"(?i)(\d{1,2})\s*:\s*(\d{2})\s*(AM|PM)";

/// Parse the end time out of a task's time-range string.
///
/// Takes the text after the first literal `-` (the whole string when
/// there is no dash) and matches `H:MM AM|PM`. Hours are taken modulo
/// 12 with 12 added for PM, so "12:30am" is 00:30 and "1:00pm" is 13:00.
///
/// Returns `None` for anything that doesn't match.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use studyflow::task::window::parse_end_time;
///
/// let end = parse_end_time("9:00am - 11:00am").unwrap();
/// assert_eq!(end, NaiveTime::from_hms_opt(11, 0, 0).unwrap());
///
/// assert!(parse_end_time("whenever").is_none());
/// ```
#[must_use]
pub fn parse_end_time(window: &str) -> Option<NaiveTime> {
    let raw_end = match window.split_once('-') {
        Some((_, end)) => end.trim(),
        None => window.trim(),
    };

    let re = Regex::new(END_TIME_PATTERN).ok()?;
    let caps = re.captures(raw_end)?;

    let mut hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    hour %= 12;
    if caps[3].eq_ignore_ascii_case("pm") {
        hour += 12;
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Check whether a task window has elapsed at `now`.
///
/// True iff `day` matches `now`'s weekday and the parsed end time is
/// strictly before `now`'s time of day. Unparseable windows never
/// count as elapsed.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use studyflow::task::{window::window_elapsed, DayOfWeek};
///
/// // Wed 2024-01-10, 20:30
/// let now = NaiveDate::from_ymd_opt(2024, 1, 10)
///     .unwrap()
///     .and_hms_opt(20, 30, 0)
///     .unwrap();
///
/// assert!(window_elapsed(DayOfWeek::Wed, "6:00pm - 8:00pm", now));
/// assert!(!window_elapsed(DayOfWeek::Thu, "6:00pm - 8:00pm", now));
/// ```
#[must_use]
pub fn window_elapsed(day: DayOfWeek, window: &str, now: NaiveDateTime) -> bool {
    if DayOfWeek::from_weekday(now.weekday()) != day {
        return false;
    }

    match parse_end_time(window) {
        Some(end) => now.time() > end,
        None => false,
    }
}

/// Get the hour bucket index (0-23) for a timestamp.
///
/// Used by the time-log view to attribute logged minutes to the hour
/// they were recorded against.
#[must_use]
pub fn hour_bucket(now: NaiveDateTime) -> usize {
    now.time().hour() as usize
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_end_time_basic() {
        assert_eq!(
            parse_end_time("9:00am - 11:00am"),
            NaiveTime::from_hms_opt(11, 0, 0)
        );
        assert_eq!(
            parse_end_time("6:00pm - 8:00pm"),
            NaiveTime::from_hms_opt(20, 0, 0)
        );
        assert_eq!(
            parse_end_time("2:00pm - 3:30pm"),
            NaiveTime::from_hms_opt(15, 30, 0)
        );
    }

    #[test]
    fn test_parse_end_time_case_insensitive() {
        assert_eq!(
            parse_end_time("10:00AM - 12:00PM"),
            NaiveTime::from_hms_opt(12, 0, 0)
        );
        assert_eq!(
            parse_end_time("10:00Am - 12:00pM"),
            NaiveTime::from_hms_opt(12, 0, 0)
        );
    }

    #[test]
    fn test_parse_end_time_twelve_wraps() {
        // 12am is midnight, 12pm is noon
        assert_eq!(
            parse_end_time("11:00pm - 12:30am"),
            NaiveTime::from_hms_opt(0, 30, 0)
        );
        assert_eq!(
            parse_end_time("11:00am - 12:00pm"),
            NaiveTime::from_hms_opt(12, 0, 0)
        );
    }

    #[test]
    fn test_parse_end_time_no_dash_uses_whole_string() {
        assert_eq!(
            parse_end_time("5:15 pm"),
            NaiveTime::from_hms_opt(17, 15, 0)
        );
    }

    #[test]
    fn test_parse_end_time_tolerates_inner_whitespace() {
        assert_eq!(
            parse_end_time("9:00am - 11 : 30 AM"),
            NaiveTime::from_hms_opt(11, 30, 0)
        );
    }

    #[test]
    fn test_parse_end_time_rejects_garbage() {
        assert_eq!(parse_end_time(""), None);
        assert_eq!(parse_end_time("whenever"), None);
        assert_eq!(parse_end_time("9-11"), None);
        assert_eq!(parse_end_time("25:00 xx"), None);
    }

    #[test]
    fn test_parse_end_time_rejects_bad_minutes() {
        // 11:75 matches the pattern but is not a valid clock time
        assert_eq!(parse_end_time("9:00am - 11:75am"), None);
    }

    #[test]
    fn test_window_elapsed_on_matching_day() {
        // Wed 2024-01-10
        let now = at(2024, 1, 10, 20, 30);
        assert!(window_elapsed(DayOfWeek::Wed, "6:00pm - 8:00pm", now));
    }

    #[test]
    fn test_window_not_elapsed_before_end() {
        let now = at(2024, 1, 10, 19, 0);
        assert!(!window_elapsed(DayOfWeek::Wed, "6:00pm - 8:00pm", now));
    }

    #[test]
    fn test_window_not_elapsed_exactly_at_end() {
        // Strictly-after comparison: the boundary minute is still live
        let now = at(2024, 1, 10, 20, 0);
        assert!(!window_elapsed(DayOfWeek::Wed, "6:00pm - 8:00pm", now));
    }

    #[test]
    fn test_window_not_elapsed_on_other_day() {
        let now = at(2024, 1, 10, 20, 30);
        assert!(!window_elapsed(DayOfWeek::Thu, "6:00pm - 8:00pm", now));
    }

    #[test]
    fn test_window_unparseable_never_elapses() {
        let now = at(2024, 1, 10, 23, 59);
        assert!(!window_elapsed(DayOfWeek::Wed, "sometime", now));
    }

    #[test]
    fn test_hour_bucket() {
        assert_eq!(hour_bucket(at(2024, 1, 10, 0, 5)), 0);
        assert_eq!(hour_bucket(at(2024, 1, 10, 14, 59)), 14);
        assert_eq!(hour_bucket(at(2024, 1, 10, 23, 0)), 23);
    }
}

//! Test fixtures for reproducible engine state.
//!
//! Provides a hydrated session and sample records pinned to a fixed
//! date (Wed 2024-01-10) so tests never depend on the wall clock.

use chrono::{NaiveDate, NaiveDateTime};

use crate::session::{SessionContext, UserData, UserProfile};
use crate::task::{DayOfWeek, Task};

/// The fixed "today" used by fixture-based tests: Wed 2024-01-10.
#[must_use]
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
}

/// An instant on the fixture day after the evening study slot.
#[must_use]
pub fn test_evening() -> NaiveDateTime {
    test_today().and_hms_opt(20, 30, 0).unwrap()
}

/// A sample account profile.
#[must_use]
pub fn test_profile() -> UserProfile {
    UserProfile {
        id: "u1".to_string(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
    }
}

/// A pending task whose window has already elapsed at [`test_evening`].
#[must_use]
pub fn overdue_task() -> Task {
    Task::new("Overdue Task", "6:00pm - 8:00pm", DayOfWeek::Wed)
}

/// A session hydrated with the starter schedule on the fixture day.
#[must_use]
pub fn seeded_session() -> SessionContext {
    let mut session = SessionContext::new();
    session.hydrate(test_profile(), UserData::default(), test_today());
    session
}

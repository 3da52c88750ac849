//! StudyFlow - scheduling engine for a personal study dashboard.
//!
//! The engine owns the task collection and everything derived from it:
//! calendar projection, missed-task reminder scanning, notification
//! derivation, stats counters, and the session's debounced save cycle.
//! Rendering and transport (the web UI, the HTTP backend, audio/OS
//! notifications) stay in the hosting application, wired in through
//! the traits in [`testing`].
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`task`] - Task records, the in-memory store, and time-window parsing
//! - [`calendar`] - Daily/Weekly/Monthly cell projection over the store
//! - [`notify`] - Due-bucket classification and the notification feed
//! - [`stats`] - Event-maintained dashboard counters and the hour log
//! - [`reminder`] - Missed-task scanning with one-shot alerts
//! - [`session`] - Login/logout lifecycle, the persisted blob, debounced saves
//! - [`config`] - Engine tunables from `studyflow.toml`
//! - [`error`] - Custom error types and handling
//! - [`telemetry`] - Tracing subscriber setup for the hosting process
//! - [`testing`] - Testing infrastructure (traits, mocks, fixtures)
//!
//! # Example
//!
//! ```rust,ignore
//! use studyflow::session::{SessionContext, UserData};
//! use studyflow::reminder::LoggingAlertSink;
//! use studyflow::calendar::{self, ViewMode};
//!
//! let mut session = SessionContext::new();
//! session.hydrate(profile, fetched_data, today);
//!
//! // Project the dashboard calendar
//! let cells = calendar::project(today, ViewMode::Weekly);
//!
//! // One reminder tick
//! let report = session.run_reminder_scan(now, &LoggingAlertSink::new());
//! if report.changed() {
//!     saver.schedule(session.snapshot());
//! }
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod notify;
pub mod reminder;
pub mod session;
pub mod stats;
pub mod task;
pub mod telemetry;
pub mod testing;

// Re-export commonly used types
pub use error::{Result, StudyflowError};

// Re-export config types
pub use config::{EngineConfig, CONFIG_FILE_NAME};

// Re-export task types
pub use task::{Category, DayOfWeek, Priority, Task, TaskId, TaskStatus, TaskStore};

// Re-export calendar types
pub use calendar::{project, week_start, CalendarCell, StatusFilter, ViewMode};

// Re-export notification types
pub use notify::{DueBucket, NotificationFeed, NotificationItem, NotificationKind};

// Re-export stats types
pub use stats::{DailyActivity, StatsAggregator, WeeklyStats};

// Re-export reminder types
pub use reminder::{
    LoggingAlertSink, ReminderConfig, ReminderRunner, ReminderScanner, ScanReport,
};

// Re-export session types
pub use session::{
    DebouncedSaver, ReminderSettings, SessionContext, UserData, UserProfile,
};

// Re-export testing types for convenience
pub use testing::{AlertSink, MockAlertSink, MockUserDataBackend, UserDataBackend};

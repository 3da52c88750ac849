//! Testing infrastructure for the StudyFlow engine.
//!
//! This module provides traits, mocks, and fixtures for testing the
//! engine without real external dependencies.
//!
//! # Architecture
//!
//! The testing infrastructure is organized into:
//! - **Traits**: Abstractions for external dependencies (backend
//!   service, alert delivery)
//! - **Mocks**: Test doubles that implement the traits with
//!   controllable behavior
//! - **Fixtures**: Pre-built session state pinned to a fixed date
//!   (test-only)
//!
//! # Example
//!
//! ```rust,ignore
//! use studyflow::testing::{MockAlertSink, MockUserDataBackend};
//!
//! let sink = MockAlertSink::new();
//! let backend = MockUserDataBackend::new().with_save_error("503");
//! ```

#[cfg(test)]
pub mod fixtures;
pub mod mocks;
pub mod traits;

// Re-export commonly used types
#[cfg(test)]
pub use fixtures::*;
pub use mocks::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ReminderSettings;
    use crate::task::TaskStatus;

    #[test]
    fn test_seeded_session_matches_starter_schedule() {
        let session = seeded_session();
        assert!(session.is_authenticated());
        assert_eq!(session.store().len(), 6);
        assert_eq!(session.store().status_counts().missed, 1);
    }

    #[test]
    fn test_fixture_scan_path_end_to_end() {
        let mut session = seeded_session();
        session.set_reminder_settings(ReminderSettings {
            enabled: true,
            tone: None,
        });
        session.add_task(overdue_task(), test_today());

        let sink = MockAlertSink::new();
        let report = session.run_reminder_scan(test_evening(), &sink);

        // The fixture task and the starter Wednesday task both lapse
        assert_eq!(report.missed.len(), 2);
        assert_eq!(sink.tone_count(), 2);
        for id in &report.missed {
            assert_eq!(session.store().get(id).unwrap().status, TaskStatus::Missed);
        }
    }

    #[tokio::test]
    async fn test_mock_backend_roundtrips_snapshot() {
        let session = seeded_session();
        let backend = MockUserDataBackend::new();

        backend.save(&session.snapshot()).await.unwrap();
        let loaded = backend.load().await.unwrap();
        assert_eq!(loaded.tasks.len(), 6);
        assert_eq!(loaded.stats.unwrap().tasks_planned, 12);
    }
}

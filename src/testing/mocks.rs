//! Mock implementations of testing traits.
//!
//! These mocks provide controllable test doubles for external dependencies,
//! enabling deterministic unit tests.

use super::traits::{AlertSink, UserDataBackend};
use crate::session::UserData;
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock alert sink that records every delivery.
///
/// # Example
///
/// ```rust,ignore
/// let sink = MockAlertSink::new();
/// sink.play_tone(None).unwrap();
/// assert_eq!(sink.tone_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockAlertSink {
    tones: Mutex<Vec<Option<String>>>,
    notifications: Mutex<Vec<(String, String)>>,
    tone_error: Option<String>,
    notify_error: Option<String>,
}

impl MockAlertSink {
    /// Create a new mock that accepts every delivery.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure tone playback to fail.
    #[must_use]
    pub fn with_tone_error(mut self, error: &str) -> Self {
        self.tone_error = Some(error.to_string());
        self
    }

    /// Configure notifications to fail (permission denied).
    #[must_use]
    pub fn with_notify_error(mut self, error: &str) -> Self {
        self.notify_error = Some(error.to_string());
        self
    }

    /// Number of tones played (attempts count even when failing).
    #[must_use]
    pub fn tone_count(&self) -> usize {
        self.tones.lock().unwrap().len()
    }

    /// Number of notifications raised (attempts count even when failing).
    #[must_use]
    pub fn notification_count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }

    /// Copy of the raised notifications as (title, body) pairs.
    #[must_use]
    pub fn notifications(&self) -> Vec<(String, String)> {
        self.notifications.lock().unwrap().clone()
    }

    /// Copy of the tones requested (None = synthesized default).
    #[must_use]
    pub fn tones(&self) -> Vec<Option<String>> {
        self.tones.lock().unwrap().clone()
    }
}

impl AlertSink for MockAlertSink {
    fn play_tone(&self, custom_tone: Option<&str>) -> Result<()> {
        self.tones
            .lock()
            .unwrap()
            .push(custom_tone.map(str::to_string));
        if let Some(ref error) = self.tone_error {
            bail!("{}", error);
        }
        Ok(())
    }

    fn notify(&self, title: &str, body: &str) -> Result<()> {
        self.notifications
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
        if let Some(ref error) = self.notify_error {
            bail!("{}", error);
        }
        Ok(())
    }
}

/// Mock user-data backend with an in-memory blob.
///
/// # Example
///
/// ```rust,ignore
/// let backend = MockUserDataBackend::new().with_stored(data);
/// let loaded = backend.load().await.unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockUserDataBackend {
    stored: Mutex<Option<UserData>>,
    saves: Mutex<Vec<UserData>>,
    save_error: Option<String>,
    load_error: Option<String>,
}

impl MockUserDataBackend {
    /// Create a new mock with nothing stored.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a stored blob.
    #[must_use]
    pub fn with_stored(self, data: UserData) -> Self {
        *self.stored.lock().unwrap() = Some(data);
        self
    }

    /// Configure saves to fail.
    #[must_use]
    pub fn with_save_error(mut self, error: &str) -> Self {
        self.save_error = Some(error.to_string());
        self
    }

    /// Configure loads to fail.
    #[must_use]
    pub fn with_load_error(mut self, error: &str) -> Self {
        self.load_error = Some(error.to_string());
        self
    }

    /// Number of successful saves recorded.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }

    /// The most recently saved blob, if any.
    #[must_use]
    pub fn last_saved(&self) -> Option<UserData> {
        self.saves.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl UserDataBackend for MockUserDataBackend {
    async fn save(&self, data: &UserData) -> Result<()> {
        if let Some(ref error) = self.save_error {
            bail!("{}", error);
        }
        self.saves.lock().unwrap().push(data.clone());
        *self.stored.lock().unwrap() = Some(data.clone());
        Ok(())
    }

    async fn load(&self) -> Result<UserData> {
        if let Some(ref error) = self.load_error {
            bail!("{}", error);
        }
        Ok(self.stored.lock().unwrap().clone().unwrap_or_default())
    }
}

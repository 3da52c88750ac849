//! Configuration for the StudyFlow engine.
//!
//! Tunables live in an optional `studyflow.toml` next to the hosting
//! application. A missing file means defaults; a present file only
//! needs the fields it wants to override.
//!
//! ```toml
//! # studyflow.toml
//! reminder_interval_secs = 30
//! save_debounce_ms = 600
//! default_view = "Weekly"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::calendar::ViewMode;
use crate::error::{Result, StudyflowError};
use crate::reminder::ReminderConfig;

/// Name of the engine config file.
pub const CONFIG_FILE_NAME: &str = "studyflow.toml";

fn default_reminder_interval_secs() -> u64 {
    crate::reminder::DEFAULT_SCAN_INTERVAL_SECS
}

fn default_save_debounce_ms() -> u64 {
    crate::session::saver::DEFAULT_SAVE_DEBOUNCE_MS
}

fn default_view() -> ViewMode {
    ViewMode::Weekly
}

/// Engine tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seconds between reminder scan ticks (default: 30).
    #[serde(default = "default_reminder_interval_secs")]
    pub reminder_interval_secs: u64,

    /// Quiet period before a scheduled save fires (default: 600).
    #[serde(default = "default_save_debounce_ms")]
    pub save_debounce_ms: u64,

    /// Calendar view shown on login (default: Weekly).
    #[serde(default = "default_view")]
    pub default_view: ViewMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reminder_interval_secs: default_reminder_interval_secs(),
            save_debounce_ms: default_save_debounce_ms(),
            default_view: default_view(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reminder scan interval in seconds.
    #[must_use]
    pub fn with_reminder_interval_secs(mut self, secs: u64) -> Self {
        self.reminder_interval_secs = secs;
        self
    }

    /// Set the save debounce in milliseconds.
    #[must_use]
    pub fn with_save_debounce_ms(mut self, ms: u64) -> Self {
        self.save_debounce_ms = ms;
        self
    }

    /// Set the default calendar view.
    #[must_use]
    pub fn with_default_view(mut self, view: ViewMode) -> Self {
        self.default_view = view;
        self
    }

    /// Load configuration from `studyflow.toml` in `dir`.
    ///
    /// A missing file yields defaults. A present file is parsed and
    /// validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but can't be read, parsed,
    /// or fails validation.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&raw).map_err(|e| {
            StudyflowError::invalid_config(CONFIG_FILE_NAME, e.to_string())
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error for zero intervals or debounce windows.
    pub fn validate(&self) -> Result<()> {
        if self.reminder_interval_secs == 0 {
            return Err(StudyflowError::invalid_config(
                "reminder_interval_secs",
                "must be greater than zero",
            ));
        }
        if self.save_debounce_ms == 0 {
            return Err(StudyflowError::invalid_config(
                "save_debounce_ms",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Reminder loop configuration derived from these tunables.
    #[must_use]
    pub fn reminder(&self) -> ReminderConfig {
        ReminderConfig::new().with_interval_secs(self.reminder_interval_secs)
    }

    /// Save debounce as a duration.
    #[must_use]
    pub fn save_delay(&self) -> Duration {
        Duration::from_millis(self.save_debounce_ms)
    }
}

// ============================================================================
// Tests
// ============================================================================

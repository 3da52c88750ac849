//! In-crate alert sink.
//!
//! The engine is headless: actually playing audio or talking to the OS
//! notification center is the hosting application's job, via its own
//! [`AlertSink`] implementation. This sink is the default wiring for
//! embedders that only want the transition behavior - it records the
//! alert in the log stream and nothing else.

use anyhow::Result;

use crate::testing::AlertSink;

/// Alert sink that emits tracing events instead of real audio/UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingAlertSink;

impl LoggingAlertSink {
    /// Create a new logging sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl AlertSink for LoggingAlertSink {
    fn play_tone(&self, custom_tone: Option<&str>) -> Result<()> {
        match custom_tone {
            Some(_) => tracing::info!("reminder tone requested (custom)"),
            None => tracing::info!("reminder tone requested (default)"),
        }
        Ok(())
    }

    fn notify(&self, title: &str, body: &str) -> Result<()> {
        tracing::info!(title, body, "reminder notification");
        Ok(())
    }
}

//! Trait definitions for testable abstractions.
//!
//! These traits abstract external dependencies to enable unit testing
//! without a real backend service, audio device, or OS notification
//! center.

use anyhow::Result;
use async_trait::async_trait;

use crate::session::UserData;

/// Abstraction for reminder alert delivery.
///
/// The engine decides *when* an alert fires; delivery (audio playback,
/// desktop notification) is platform glue supplied by the embedder.
/// Errors from either channel are swallowed by the caller after
/// logging - a denied notification permission must never stop a scan.
///
/// # Example
///
/// ```rust,ignore
/// use studyflow::testing::AlertSink;
///
/// fn ring(sink: &impl AlertSink, tone: Option<&str>) {
///     let _ = sink.play_tone(tone);
///     let _ = sink.notify("Task missed", "Math Study was marked as missed.");
/// }
/// ```
pub trait AlertSink: Send + Sync {
    /// Play the reminder tone.
    ///
    /// `custom_tone` carries the user-uploaded tone (a data URL) when
    /// one is set; `None` means the built-in synthesized tone.
    ///
    /// # Errors
    ///
    /// Returns an error if audio playback is unavailable.
    fn play_tone(&self, custom_tone: Option<&str>) -> Result<()>;

    /// Raise a desktop notification.
    ///
    /// # Errors
    ///
    /// Returns an error if notification permission is missing.
    fn notify(&self, title: &str, body: &str) -> Result<()>;
}

/// Abstraction for the user-data backend.
///
/// The hosting application implements this against its HTTP service;
/// the engine only ever sees the persisted blob. This trait is async
/// to support non-blocking network transports.
///
/// # Example
///
/// ```rust,ignore
/// use studyflow::testing::UserDataBackend;
///
/// async fn restore(backend: &impl UserDataBackend) -> anyhow::Result<UserData> {
///     backend.load().await
/// }
/// ```
#[async_trait]
pub trait UserDataBackend: Send + Sync {
    /// Persist the full user-data blob.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure. Callers treat this as
    /// transient: the save is dropped and the next change retries.
    async fn save(&self, data: &UserData) -> Result<()>;

    /// Fetch the stored user-data blob.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or authentication failure.
    async fn load(&self) -> Result<UserData>;
}
